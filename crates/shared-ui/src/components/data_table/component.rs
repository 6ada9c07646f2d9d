use dioxus::prelude::*;

/// Horizontally scrollable table with a header row built from `columns`.
///
/// When `is_empty` is set the body is a single full-width row holding
/// `empty` instead of the children.
#[component]
pub fn DataTable(
    columns: Vec<&'static str>,
    #[props(default)] empty: String,
    #[props(default)] is_empty: bool,
    children: Element,
) -> Element {
    let span = columns.len().max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    if is_empty {
                        tr {
                            td { class: "data-table-empty", colspan: "{span}", "{empty}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
