use crate::views::layout::{render_layout, template_env};
use minijinja::context;
use pos_probe::models::{ProbeSnapshot, Status};

pub const CONFIG_WARNING: &str =
    "VITE_API_BASE_URL is not defined. Please check your .env file or environment variables.";

pub fn render_probe_page(snapshot: &ProbeSnapshot, configured: bool) -> Result<String, String> {
    let card = render_probe_card(snapshot, configured)?;
    render_layout("Connection Test", "Connection Test", &card)
}

pub fn render_probe_card(snapshot: &ProbeSnapshot, configured: bool) -> Result<String, String> {
    let loading = snapshot.status.is_loading();
    let context = context! {
        status => snapshot.status.as_str(),
        status_class => snapshot.status.indicator().css_class(),
        message => &snapshot.message,
        checked_at => &snapshot.checked_at,
        show_status => snapshot.status != Status::Idle,
        loading => loading,
        button_label => button_label(snapshot.status),
        configured => configured,
        config_warning => CONFIG_WARNING,
    };

    template_env()
        .get_template("partials/probe_card.html")
        .and_then(|template| template.render(context))
        .map_err(|err| format!("template error: {err}"))
}

fn button_label(status: Status) -> &'static str {
    if status.is_loading() {
        "Testing..."
    } else {
        "Test Backend Connection"
    }
}
