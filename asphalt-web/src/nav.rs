//! Mobile navigation menu: opens from the toggle button and closes from the
//! close button, any menu link, the menu backdrop or the Escape key.

use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use asphalt_core::{MenuEffect, MenuEvent, MenuState, NavConfig};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use crate::{
    dom::{self, JsResultExt},
    plan::MenuStyle,
};

pub struct NavToggle {
    state: MenuState,
    menu: Element,
    body: Option<HtmlElement>,
    active_class: String,
}

impl NavToggle {
    /// Binds the menu handlers. Returns `Ok(false)` when the page has no menu.
    pub fn mount(
        document: &Document,
        config: &NavConfig,
    ) -> Result<bool> {
        let Some(menu) = dom::select(
            document.query_selector(&config.menu_selector),
            &config.menu_selector,
        ) else {
            debug!(selector = %config.menu_selector, "navigation menu not found");
            return Ok(false);
        };

        let nav = Rc::new(RefCell::new(Self {
            state: MenuState::default(),
            menu: menu.clone(),
            body: document.body(),
            active_class: config.active_class.clone(),
        }));

        for (selector, event) in [
            (&config.toggle_selector, MenuEvent::ToggleClicked),
            (&config.close_selector, MenuEvent::CloseClicked),
        ] {
            match dom::select(document.query_selector(selector), selector) {
                Some(button) => {
                    dom::listen(&button, "click", dispatcher(Rc::clone(&nav), event))?;
                }
                None => debug!(%selector, ?event, "navigation control not found"),
            }
        }

        let links = menu
            .query_selector_all("a")
            .js_context("querying menu links")?;
        for i in 0..links.length() {
            if let Some(link) = links.item(i) {
                let on_link = dispatcher(Rc::clone(&nav), MenuEvent::LinkClicked);
                dom::listen(&link, "click", on_link)?;
            }
        }

        {
            let nav = Rc::clone(&nav);
            let backdrop = menu.clone();
            dom::listen(&menu, "click", move |event: Event| {
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|target| backdrop.is_same_node(Some(&target)));
                if on_backdrop {
                    Self::dispatch(&nav, MenuEvent::BackdropClicked);
                }
            })?;
        }

        {
            let nav = Rc::clone(&nav);
            dom::listen(document, "keydown", move |event: Event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if escape {
                    Self::dispatch(&nav, MenuEvent::EscapePressed);
                }
            })?;
        }

        info!(links = links.length(), "navigation toggle mounted");
        Ok(true)
    }

    fn dispatch(
        nav: &Rc<RefCell<Self>>,
        event: MenuEvent,
    ) {
        let mut nav = nav.borrow_mut();
        let Some(effect) = nav.state.apply(event) else {
            return;
        };
        debug!(?event, state = ?nav.state, "menu transition");
        if let Err(error) = nav.apply_effect(effect) {
            warn!(?error, ?effect, "failed to update navigation menu");
        }
    }

    fn apply_effect(
        &self,
        effect: MenuEffect,
    ) -> Result<()> {
        let style = MenuStyle::for_effect(effect);
        let class_list = self.menu.class_list();
        if style.active {
            class_list
                .add_1(&self.active_class)
                .js_context("marking menu active")?;
        } else {
            class_list
                .remove_1(&self.active_class)
                .js_context("clearing menu active mark")?;
        }

        let Some(body) = &self.body else {
            return Ok(());
        };
        match style.body_overflow {
            Some(overflow) => body
                .style()
                .set_property("overflow", overflow)
                .js_context("locking page scroll"),
            None => body
                .style()
                .remove_property("overflow")
                .map(drop)
                .js_context("restoring page scroll"),
        }
    }
}

fn dispatcher(
    nav: Rc<RefCell<NavToggle>>,
    event: MenuEvent,
) -> impl FnMut(Event) + 'static {
    move |_| NavToggle::dispatch(&nav, event)
}
