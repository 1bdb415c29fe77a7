use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped under `public/icons`
pub mod icons {
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";
    pub const INFO: &str = "info";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const PLAY: &str = "play";
    pub const USER: &str = "user";
    pub const LOG_OUT: &str = "log-out";
}
