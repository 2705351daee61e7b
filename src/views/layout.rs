use minijinja::{Environment, context};
use std::sync::OnceLock;

pub const APP_TITLE: &str = "Coffee POS System";

pub fn render_layout(title: &str, subtitle: &str, content: &str) -> Result<String, String> {
    let context = context! {
        app_title => APP_TITLE,
        title => title,
        subtitle => subtitle,
        content => content,
    };

    template_env()
        .get_template("layouts/base.html")
        .and_then(|template| template.render(context))
        .map_err(|err| format!("template error: {err}"))
}

pub fn template_env() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir()));
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
        env
    })
}

fn templates_dir() -> String {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .to_string_lossy()
        .to_string()
}
