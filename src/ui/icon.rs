use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under `/icons`)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BRAIN: &str = "brain";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const DIAMOND: &str = "diamond";
    pub const DOWNLOAD: &str = "download";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const MIC: &str = "mic";
    pub const PLAY: &str = "play";
    pub const SCAN_FACE: &str = "scan-face";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const TROPHY: &str = "trophy";
    pub const X: &str = "x";

    pub const ALL: &[&str] = &[
        ARROW_RIGHT,
        BRAIN,
        CHECK_CIRCLE,
        DIAMOND,
        DOWNLOAD,
        MAIL,
        MENU,
        MIC,
        PLAY,
        SCAN_FACE,
        SPARKLES,
        STAR,
        TROPHY,
        X,
    ];
}
