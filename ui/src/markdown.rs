use pulldown_cmark::{Options, Parser, html};

/// Convert model output (markdown) to HTML that is safe to inject with
/// `innerHTML`.
///
/// Tables, strikethrough and footnotes are enabled since analysis answers
/// lean on them. The HTML is passed through `ammonia`, which strips scripts,
/// event-handler attributes and `javascript:` links while keeping ordinary
/// formatting tags.
pub fn render(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(input, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::clean(&html_output)
}
