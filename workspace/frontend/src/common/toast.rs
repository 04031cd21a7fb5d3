use std::rc::Rc;

use momo_dashboard::{Notice, NoticeLevel};
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "fas fa-check-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

impl From<NoticeLevel> for ToastType {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Success => ToastType::Success,
            NoticeLevel::Error => ToastType::Error,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Shared handle for raising toasts. The callbacks stay valid across renders.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_notice(&self, notice: Notice) {
        self.add_toast.emit((notice.message, notice.level.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);
    let dispatcher = list.dispatcher();

    let remove_toast = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = Callback::from(move |(message, toast_type): (String, ToastType)| {
        let id = {
            let mut next_id = next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };
        dispatcher.dispatch(ToastAction::Add(Toast {
            id,
            message,
            toast_type,
        }));

        // Auto-dismiss
        let dispatcher = dispatcher.clone();
        let duration = settings::get_settings().toast_duration_ms;
        let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        });
        timeout_handle.forget();
    });

    let context = use_memo((), move |_| ToastContext {
        add_toast,
        remove_toast,
    });

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = context.remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
