use crate::views::layout::render_layout;

pub fn health_html(base_url: Option<&str>) -> String {
    let target = base_url
        .map(|value| format!("<code>{}</code>", html_escape::encode_text(value)))
        .unwrap_or_else(|| "<span class=\"probe-status--error\">not configured</span>".to_string());
    let content = format!(
        r#"<div class="probe-card">
          <p class="mb-1">Status: ok</p>
          <p class="mb-0">Backend: {target}</p>
        </div>"#
    );

    render_layout("Health", "Probe Health", &content).unwrap_or_else(|err| err)
}
