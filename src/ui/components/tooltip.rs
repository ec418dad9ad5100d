use dioxus::prelude::*;

use crate::domain::{tooltip, PointerEvent, TooltipState, TooltipVariant, Viewport};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// Handle over the app-wide tooltip signal and the current viewport.
#[derive(Clone, Copy)]
pub struct TooltipHandle {
    state: Signal<TooltipState<TooltipContent>>,
    viewport: Signal<Viewport>,
}

impl TooltipHandle {
    pub fn show(mut self, evt: &MouseEvent, content: TooltipContent, variant: Option<TooltipVariant>) {
        let point = evt.client_coordinates();
        let viewport = (self.viewport)();
        self.state.with_mut(|state| {
            tooltip::show(state, PointerEvent::new(point.x, point.y), viewport, content, variant)
        });
    }

    pub fn hide(mut self) {
        self.state.with_mut(tooltip::hide);
    }
}

pub fn use_tooltip() -> TooltipHandle {
    TooltipHandle {
        state: use_context::<Signal<TooltipState<TooltipContent>>>(),
        viewport: use_context::<Signal<Viewport>>(),
    }
}

#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<Signal<TooltipState<TooltipContent>>>();
    let current = state();

    if !current.visible {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "{current.variant.class()}",
            style: "left: {current.x}px; top: {current.y}px;",
            h4 { class: "tooltip-title", "{current.content.title}" }
            for line in current.content.lines.iter() {
                p { class: "tooltip-line", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_builder_collects_lines() {
        let content = TooltipContent::new("Nemo Reef")
            .line("Ecological Preserve")
            .line("No fishing");
        assert_eq!(content.title, "Nemo Reef");
        assert_eq!(content.lines, ["Ecological Preserve", "No fishing"]);
    }
}
