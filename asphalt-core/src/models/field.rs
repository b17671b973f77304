use serde::{Deserialize, Serialize};

/// One of the two dimension inputs on the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Length,
}

impl Field {
    /// Both fields, in the order they are validated and rendered.
    pub const ALL: [Field; 2] = [Field::Width, Field::Length];

    /// Element id of the field's input. The DOM layer looks inputs up by this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Length => "length",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "width" => Some(Self::Width),
            "length" => Some(Self::Length),
            _ => None,
        }
    }

    /// Question shown in the field's label.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Width => "What is the width of your asphalt?",
            Self::Length => "What is the length of your asphalt?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Width => "Enter width in feet",
            Self::Length => "Enter length in feet",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_element_ids() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_eq!(Field::parse("depth"), None);
        assert_eq!(Field::parse("Width"), None);
    }
}
