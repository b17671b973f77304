//! Structure of the estimate form.
//!
//! The form is described as a [`ViewNode`] tree and only turned into real
//! elements by the DOM layer. The element ids in [`ids`] are how the widget
//! finds its inputs and output slots again after mounting.

use asphalt_core::Field;

/// Element ids and class names the widget relies on.
pub mod ids {
    pub const FORM: &str = "asphalt-calc-form";
    pub const CALCULATE: &str = "calculate-btn";
    pub const RESULTS: &str = "results";
    pub const LOW_PRICE: &str = "low-price";
    pub const HIGH_PRICE: &str = "high-price";
    pub const STYLESHEET: &str = "asphalt-calculator-styles";

    /// Class of the inline messages shown beside rejected fields.
    pub const ERROR_CLASS: &str = "error";
}

const DISCLAIMER: &str =
    "This is an estimate. For exact pricing please contact us for an official quote.";

/// One element: tag, attributes, optional text and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(
        mut self,
        name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn id(
        self,
        id: impl Into<String>,
    ) -> Self {
        self.attr("id", id)
    }

    pub fn class(
        self,
        class: impl Into<String>,
    ) -> Self {
        self.attr("class", class)
    }

    pub fn text(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(
        mut self,
        child: ViewNode,
    ) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    pub fn get_attr(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    /// Depth-first search for the node with the given id.
    pub fn find(
        &self,
        id: &str,
    ) -> Option<&ViewNode> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// The complete estimate form, results panel hidden.
pub fn estimate_form() -> ViewNode {
    let mut form = ViewNode::new("form").id(ids::FORM);
    for field in Field::ALL {
        form = form.child(dimension_group(field));
    }

    let form = form
        .child(
            ViewNode::new("div").class("form-group").child(
                ViewNode::new("button")
                    .attr("type", "button")
                    .id(ids::CALCULATE)
                    .text("Calculate Estimate"),
            ),
        )
        .child(results_panel());

    ViewNode::new("div")
        .class("asphalt-calculator")
        .child(ViewNode::new("h3").text("Get an instant estimate"))
        .child(form)
}

/// Inline message for a rejected field.
pub fn field_error(message: &str) -> ViewNode {
    ViewNode::new("div").class(ids::ERROR_CLASS).text(message)
}

fn dimension_group(field: Field) -> ViewNode {
    ViewNode::new("div")
        .class("form-group")
        .child(
            ViewNode::new("label")
                .attr("for", field.as_str())
                .text(field.prompt()),
        )
        .child(
            ViewNode::new("input")
                .attr("type", "number")
                .id(field.as_str())
                .attr("name", field.as_str())
                .attr("placeholder", field.placeholder())
                .attr("min", "0")
                .attr("step", "0.1"),
        )
        .child(ViewNode::new("span").class("unit").text("feet"))
}

fn results_panel() -> ViewNode {
    ViewNode::new("div")
        .id(ids::RESULTS)
        .class("results")
        .attr("style", "display: none;")
        .child(ViewNode::new("h4").text("Estimated price between"))
        .child(
            ViewNode::new("div")
                .class("price-range")
                .child(ViewNode::new("span").id(ids::LOW_PRICE).text("$0"))
                .child(ViewNode::new("span").class("and").text("and"))
                .child(ViewNode::new("span").id(ids::HIGH_PRICE).text("$0")),
        )
        .child(ViewNode::new("p").class("disclaimer").text(DISCLAIMER))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn form_contains_every_id_the_widget_looks_up() {
        let view = estimate_form();

        for id in [
            ids::FORM,
            ids::CALCULATE,
            ids::RESULTS,
            ids::LOW_PRICE,
            ids::HIGH_PRICE,
            Field::Width.as_str(),
            Field::Length.as_str(),
        ] {
            assert!(view.find(id).is_some(), "missing #{id}");
        }
    }

    #[test]
    fn dimension_inputs_accept_positive_tenths_of_a_foot() {
        let view = estimate_form();

        for field in Field::ALL {
            let input = view.find(field.as_str()).unwrap();
            assert_eq!(input.tag(), "input");
            assert_eq!(input.get_attr("type"), Some("number"));
            assert_eq!(input.get_attr("min"), Some("0"));
            assert_eq!(input.get_attr("step"), Some("0.1"));
        }
    }

    #[test]
    fn results_panel_starts_hidden_with_zero_prices() {
        let view = estimate_form();

        let results = view.find(ids::RESULTS).unwrap();
        assert_eq!(results.get_attr("style"), Some("display: none;"));
        assert_eq!(view.find(ids::LOW_PRICE).unwrap().text_content(), Some("$0"));
        assert_eq!(view.find(ids::HIGH_PRICE).unwrap().text_content(), Some("$0"));
    }

    #[test]
    fn calculate_button_does_not_submit_the_form() {
        let view = estimate_form();

        let button = view.find(ids::CALCULATE).unwrap();
        assert_eq!(button.get_attr("type"), Some("button"));
    }

    #[test]
    fn field_error_carries_message_and_class() {
        let node = field_error("Please enter a valid width");

        assert_eq!(node.get_attr("class"), Some(ids::ERROR_CLASS));
        assert_eq!(node.text_content(), Some("Please enter a valid width"));
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        assert_eq!(estimate_form().find("depth"), None);
    }
}
