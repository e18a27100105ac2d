use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#2196F3",
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Holds the single visible notification, if any.
#[derive(Debug, Default, PartialEq)]
pub struct Notifications {
    current: Option<Notification>,
    next_id: u32,
}

pub enum NotificationAction {
    Show { message: String, severity: Severity },
    Dismiss(u32),
}

impl Notifications {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl Reducible for Notifications {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { message, severity } => Rc::new(Self {
                current: Some(Notification {
                    id: self.next_id,
                    message,
                    severity,
                }),
                next_id: self.next_id.wrapping_add(1),
            }),
            NotificationAction::Dismiss(id) => match &self.current {
                Some(n) if n.id == id => Rc::new(Self {
                    current: None,
                    next_id: self.next_id,
                }),
                // Already replaced by a newer one
                _ => self,
            },
        }
    }
}

/// Handle components use to raise notifications.
#[derive(Clone, Default, PartialEq)]
pub struct Notifier(Option<UseReducerDispatcher<Notifications>>);

impl Notifier {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match &self.0 {
            Some(dispatcher) => dispatcher.dispatch(NotificationAction::Show { message, severity }),
            None => warn!("No notification provider, dropping: {}", message),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let notifications = use_reducer_eq(Notifications::default);
    let notifier = Notifier(Some(notifications.dispatcher()));
    let current = notifications.current().cloned();

    // Restarted for every new notification; dropping the old handle cancels it
    {
        let dispatcher = notifications.dispatcher();
        let id = current.as_ref().map(|n| n.id);
        use_effect_with_deps(
            move |id| {
                let timeout = id.map(|id| {
                    Timeout::new(config::NOTIFICATION_DISMISS_MS, move || {
                        dispatcher.dispatch(NotificationAction::Dismiss(id));
                    })
                });
                move || drop(timeout)
            },
            id,
        );
    }

    let on_close = {
        let dispatcher = notifications.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(NotificationAction::Dismiss(id)))
    };

    let toast = current.map(|notification| {
        let id = notification.id;
        html! {
            <NotificationToast key={id} {notification} {on_close} />
        }
    });

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            { toast }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationToastProps {
    notification: Notification,
    on_close: Callback<u32>,
}

#[styled_component]
fn NotificationToast(props: &NotificationToastProps) -> Html {
    let Notification { id, message, severity } = &props.notification;
    let close = {
        let on_close = props.on_close.clone();
        let id = *id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    let toast = css!(
        r#"
        position: fixed;
        top: 100px;
        right: 20px;
        background: ${bg};
        color: white;
        padding: 15px 20px;
        border-radius: 10px;
        box-shadow: 0 4px 20px rgba(0,0,0,0.2);
        z-index: 3000;
        display: flex;
        align-items: center;
        gap: 10px;
        max-width: 350px;
        animation: slideInRight 0.3s ease-out;
        font-family: 'Inter', sans-serif;
        font-size: 14px;

        .notification-close {
            cursor: pointer;
            margin-left: auto;
            opacity: 0.7;
            transition: opacity 0.2s;
        }
        .notification-close:hover {
            opacity: 1;
        }
        "#,
        bg = severity.color()
    );

    html! {
        <div class={classes!("notification", severity.class(), toast)} role="alert">
            <i class={classes!("fas", severity.icon())}></i>
            <span>{ message }</span>
            <i class="fas fa-times notification-close" onclick={close}></i>
        </div>
    }
}
