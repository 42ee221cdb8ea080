//! HTML landing page served at `/`.

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Skill Icons API</title>
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 0 auto; padding: 2rem; line-height: 1.6; color: #333; }
    h1 { color: #2563eb; }
    code { background: #f3f4f6; padding: 0.2em 0.4em; border-radius: 3px; font-family: 'Courier New', monospace; }
    .endpoint { background: #f9fafb; padding: 1rem; margin: 1rem 0; border-left: 4px solid #2563eb; border-radius: 4px; }
    .example { color: #059669; margin-top: 0.5rem; }
  </style>
</head>
<body>
  <h1>Skill Icons API</h1>
  <p>Showcase your skills with a single composed SVG. {count} icons available.</p>

  <h2>Endpoints</h2>

  <div class="endpoint">
    <h3><code>GET /icons</code></h3>
    <p>Compose several icons into one SVG grid.</p>
    <ul>
      <li><code>i</code> or <code>icons</code>: comma-separated icon names, or <code>all</code> (required)</li>
      <li><code>t</code> or <code>theme</code>: <code>light</code> or <code>dark</code> (default <code>dark</code>)</li>
      <li><code>perline</code>: icons per row, 1 to 50 (default 15)</li>
    </ul>
    <div class="example"><code>/icons?i=js,html,css,react&amp;theme=light&amp;perline=4</code></div>
  </div>

  <div class="endpoint">
    <h3><code>GET /api/icons</code></h3>
    <p>JSON array of every icon name.</p>
  </div>

  <div class="endpoint">
    <h3><code>GET /api/svgs</code></h3>
    <p>JSON object mapping every icon key to its SVG markup.</p>
  </div>

  <h2>Preview</h2>
  <img src="/icons?i=js,html,css,react,nodejs" alt="Example icons" style="max-width: 100%;" />
</body>
</html>
"#;

/// Render the landing page for a catalogue with `icon_count` icons.
pub fn render(icon_count: usize) -> String {
    TEMPLATE.replace("{count}", &icon_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_count_and_endpoints() {
        let html = render(42);
        assert!(html.contains("42 icons available"));
        assert!(html.contains("GET /icons"));
        assert!(html.contains("GET /api/svgs"));
        assert!(!html.contains("{count}"));
    }
}
