//! Embedded stylesheet for converted documents.

/// Stylesheet lines placed inside `<style>`, in emission order.
///
/// Tables scroll horizontally inside `.table-container`. First row and
/// first column cells get smaller type, and two breakpoints shrink
/// everything further on narrow screens.
pub const STYLESHEET: &[&str] = &[
    "* { box-sizing: border-box; }",
    "body { ",
    "  font-family: Arial, sans-serif; ",
    "  margin: 10px; ",
    "  line-height: 1.4; ",
    "  font-size: 12px; ",
    "  color: #333; ",
    "  background-color: #fff; ",
    "}",
    ".table-container { ",
    "  width: 100%; ",
    "  overflow-x: auto; ",
    "  margin: 10px 0; ",
    "  -webkit-overflow-scrolling: touch; ",
    "}",
    "table { ",
    "  border-collapse: collapse; ",
    "  width: 100%; ",
    "  min-width: 600px; ",
    "  font-size: 10px; ",
    "}",
    "td, th { ",
    "  border: 1px solid #ccc; ",
    "  padding: 6px; ",
    "  vertical-align: top; ",
    "  word-wrap: break-word; ",
    "  max-width: 200px; ",
    "}",
    "th { ",
    "  background-color: #f8f9fa; ",
    "  font-weight: bold; ",
    "}",
    ".first-row { ",
    "  font-size: 9px !important; ",
    "  padding: 4px 6px !important; ",
    "}",
    ".first-col { ",
    "  font-size: 9px !important; ",
    "  padding: 4px 6px !important; ",
    "}",
    ".first-row.first-col { ",
    "  font-size: 8px !important; ",
    "  padding: 3px 5px !important; ",
    "}",
    "p { ",
    "  margin: 6px 0; ",
    "  font-size: 12px; ",
    "}",
    "h1 { font-size: 18px; margin: 12px 0 6px 0; }",
    "h2 { font-size: 16px; margin: 10px 0 5px 0; }",
    "h3 { font-size: 14px; margin: 8px 0 4px 0; }",
    "h4 { font-size: 13px; margin: 7px 0 3px 0; }",
    "h5 { font-size: 12px; margin: 6px 0 3px 0; }",
    "h6 { font-size: 11px; margin: 5px 0 2px 0; }",
    "@media (max-width: 480px) { ",
    "  body { margin: 5px; font-size: 11px; }",
    "  p { font-size: 11px; margin: 4px 0; }",
    "  td, th { padding: 4px; font-size: 9px; }",
    "  .first-row { font-size: 8px !important; padding: 3px 4px !important; }",
    "  .first-col { font-size: 8px !important; padding: 3px 4px !important; }",
    "  .first-row.first-col { font-size: 7px !important; padding: 2px 3px !important; }",
    "  h1 { font-size: 16px; }",
    "  h2 { font-size: 14px; }",
    "  h3 { font-size: 13px; }",
    "  h4 { font-size: 12px; }",
    "  h5 { font-size: 11px; }",
    "  h6 { font-size: 10px; }",
    "}",
    "@media (max-width: 360px) { ",
    "  body { margin: 3px; font-size: 10px; }",
    "  p { font-size: 10px; margin: 3px 0; }",
    "  td, th { padding: 3px; font-size: 8px; }",
    "  .first-row { font-size: 7px !important; padding: 2px 3px !important; }",
    "  .first-col { font-size: 7px !important; padding: 2px 3px !important; }",
    "  .first-row.first-col { font-size: 6px !important; padding: 1px 2px !important; }",
    "  h1 { font-size: 14px; }",
    "  h2 { font-size: 13px; }",
    "  h3 { font-size: 12px; }",
    "  h4 { font-size: 11px; }",
    "  h5 { font-size: 10px; }",
    "  h6 { font-size: 9px; }",
    "}",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braces_balance() {
        let css = STYLESHEET.join("\n");
        assert_eq!(css.matches('{').count(), css.matches('}').count());
        assert!(css.contains("@media (max-width: 480px)"));
        assert!(css.contains("@media (max-width: 360px)"));
        assert!(css.contains(".first-row.first-col"));
    }
}
