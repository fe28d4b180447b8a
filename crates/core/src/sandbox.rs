//! Built-in starter document for the sandbox editor.

/// Document loaded into the sandbox when nothing has been saved yet, and
/// restored by a reset.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <style>
    body { margin: 0; font-family: 'Inter', sans-serif; background: #111; color: #f5f5f7; }
    .card { max-width: 520px; margin: 24px auto; padding: 18px; border-radius: 14px; background: #1f1f24; border: 1px solid #2f2f33; }
    .pill { display: inline-block; padding: 6px 10px; border-radius: 999px; background: #6a8bff33; color: #c7d0ff; border: 1px solid #2f3755; font-weight: 600; }
    button { padding: 10px 14px; border-radius: 12px; border: none; background: linear-gradient(135deg, #6a8bff, #9a6bff); color: #fff; font-weight: 700; cursor: pointer; }
  </style>
</head>
<body>
  <div class="card">
    <span class="pill">Mini Demo</span>
    <h2>Hello <span id="who">Coder</span></h2>
    <p>Build your own experiments here. Style it however you like.</p>
    <button onclick="document.getElementById('who').textContent = 'World';">Say hi</button>
  </div>
</body>
</html>"#;
