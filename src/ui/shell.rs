use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Viewport;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut viewport = use_context::<Signal<Viewport>>();

    rsx! {
        div {
            class: "shell",
            // The shell is pinned to the window (see main.css), so its box is the viewport.
            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    viewport.set(Viewport::new(size.width, size.height));
                }
            },
            header { class: "shell-header",
                div {
                    h1 { class: "shell-title", "{APP_NAME}" }
                    p { class: theme::MUTED, "Maritime traffic, harbor and trajectory analysis" }
                }
                nav { class: "shell-nav",
                    NavButton {
                        active: matches!(current_route, Route::TrafficExplorer {}),
                        onclick: move |_| { nav.push(Route::TrafficExplorer {}); },
                        label: "Traffic Explorer",
                    }
                    NavButton {
                        active: matches!(current_route, Route::HarborInspector {}),
                        onclick: move |_| { nav.push(Route::HarborInspector {}); },
                        label: "Harbor Inspector",
                    }
                    NavButton {
                        active: matches!(current_route, Route::TrajectoryAnalyzer {}),
                        onclick: move |_| { nav.push(Route::TrajectoryAnalyzer {}); },
                        label: "Trajectory Analyzer",
                    }
                }
            }
            main { class: "shell-main",
                {children}
            }
            footer { class: "shell-footer {theme::MUTED}", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
