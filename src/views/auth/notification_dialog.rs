use yew::prelude::*;

use crate::viewmodels::Notification;

#[derive(Properties, PartialEq)]
pub struct NotificationDialogProps {
    pub notification: Notification,
    pub on_dismiss: Callback<()>,
}

/// Modal with the outcome of the last request. Overlay click and "OK" both dismiss.
#[function_component(NotificationDialog)]
pub fn notification_dialog(props: &NotificationDialogProps) -> Html {
    let notification = &props.notification;
    if !notification.visible {
        return html! {};
    }

    let dialog_class = classes!(
        "dialog",
        if notification.is_success { "dialog-success" } else { "dialog-error" }
    );

    html! {
        <div class="dialog-backdrop" onclick={props.on_dismiss.reform(|_: MouseEvent| ())}>
            <div
                class={dialog_class}
                role="alertdialog"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <h2 class="dialog-title">{notification.title()}</h2>
                <div class="dialog-content">
                    <p>{&notification.message}</p>
                </div>
                <div class="dialog-actions">
                    <button
                        type="button"
                        class="btn-dialog"
                        onclick={props.on_dismiss.reform(|_: MouseEvent| ())}
                    >
                        {"OK"}
                    </button>
                </div>
            </div>
        </div>
    }
}
