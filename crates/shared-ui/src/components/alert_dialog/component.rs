use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Re-export a primitive part with the class its stylesheet targets.
macro_rules! styled_part {
    ($(#[$meta:meta])* $name:ident, $props:ident, $class:literal) => {
        $(#[$meta])*
        #[component]
        pub fn $name(mut props: prim::$props) -> Element {
            props
                .attributes
                .push(Attribute::new("class", $class, None, false));
            rsx! {
                prim::$name { ..props }
            }
        }
    };
}

/// Modal confirmation. Control it with `open` and `on_open_change`.
#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "alert-dialog-content".to_string());
    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

styled_part!(AlertDialogTitle, AlertDialogTitleProps, "alert-dialog-title");
styled_part!(AlertDialogDescription, AlertDialogDescriptionProps, "alert-dialog-description");
styled_part!(AlertDialogActions, AlertDialogActionsProps, "alert-dialog-actions");
styled_part!(
    /// The confirming action, styled as destructive.
    AlertDialogAction,
    AlertDialogActionProps,
    "alert-dialog-action"
);
styled_part!(AlertDialogCancel, AlertDialogCancelProps, "alert-dialog-cancel");
