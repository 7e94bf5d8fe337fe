use dioxus::prelude::*;
use state::PageControl;

/// Pagination bar. Reports the page the clicked control asks for, relative to
/// `current`; disabled controls render but never report.
#[component]
pub fn Pagination(
    controls: Vec<PageControl>,
    current: Option<u32>,
    on_select: EventHandler<u32>,
) -> Element {
    if controls.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            ul {
                class: "pagination justify-content-center",
                for control in controls {
                    PageLink {
                        key: "{control.label}",
                        control,
                        current,
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn PageLink(control: PageControl, current: Option<u32>, on_select: EventHandler<u32>) -> Element {
    let class = item_class(&control);
    let label = control.label.clone();

    rsx! {
        li {
            class: "{class}",
            a {
                class: "page-link",
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    if let Some(page) = control.request(current) {
                        on_select.call(page);
                    }
                },
                "{label}"
            }
        }
    }
}

fn item_class(control: &PageControl) -> &'static str {
    match (control.active, control.disabled) {
        (true, _) => "page-item active",
        (false, true) => "page-item disabled",
        (false, false) => "page-item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::PageWindow;

    #[test]
    fn test_item_classes() {
        let classes: Vec<_> = PageWindow::new(1, 1).controls().iter().map(item_class).collect();
        assert_eq!(
            classes,
            vec!["page-item disabled", "page-item active", "page-item disabled"]
        );
    }
}
