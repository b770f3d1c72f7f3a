//! Renders a [`DocComment`] as documentation comment trivia.
//!
//! The output is the text a host would place in a declaration's leading trivia: `///`
//! lines carrying XML elements, each line prefixed with the declaration's indentation
//! and terminated by the configured line ending.

use crate::doc::{DocComment, DocNode, Inline};

const LINE_PREFIX: &str = "/// ";

/// Renders `comment` into documentation trivia.
///
/// # Arguments
///
/// * `comment` - The comment to render
/// * `line_ending` - Line ending used for every line break
/// * `indentation` - Leading whitespace of the documented declaration
///
/// # Returns
///
/// The trivia text, ending with a line ending. An empty comment renders as an empty string.
pub fn render(comment: &DocComment, line_ending: &str, indentation: &str) -> String {
    if comment.is_empty() {
        return String::new();
    }

    let line_break = format!("{}{}{}", line_ending, indentation, LINE_PREFIX);
    let mut out = format!("{}{}", indentation, LINE_PREFIX);

    for node in comment.nodes() {
        match node {
            DocNode::NewLine => out.push_str(&line_break),
            DocNode::Summary { content } => {
                out.push_str("<summary>");
                out.push_str(&line_break);
                push_content(&mut out, content);
                out.push_str(&line_break);
                out.push_str("</summary>");
            }
            DocNode::TypeParam { name, content } => {
                push_named_element(&mut out, "typeparam", name.as_deref(), content)
            }
            DocNode::Param { name, content } => {
                push_named_element(&mut out, "param", name.as_deref(), content)
            }
            DocNode::Returns { content } => {
                out.push_str("<returns>");
                push_content(&mut out, content);
                out.push_str("</returns>");
            }
            DocNode::Exception { cref, content } => {
                out.push_str(&format!("<exception cref=\"{}\">", escape_attribute(cref)));
                push_content(&mut out, content);
                out.push_str("</exception>");
            }
            DocNode::Other { raw } => out.push_str(raw),
        }
    }

    out.push_str(line_ending);
    out
}

fn push_named_element(out: &mut String, tag: &str, name: Option<&str>, content: &[Inline]) {
    match name {
        Some(name) => out.push_str(&format!("<{} name=\"{}\">", tag, escape_attribute(name))),
        None => out.push_str(&format!("<{}>", tag)),
    }
    push_content(out, content);
    out.push_str(&format!("</{}>", tag));
}

fn push_content(out: &mut String, content: &[Inline]) {
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(&escape_text(text)),
            Inline::See(cref) => {
                out.push_str(&format!("<see cref=\"{}\"/>", escape_attribute(cref)))
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method_comment() -> DocComment {
        let mut comment = DocComment::new();
        comment.push_element(DocNode::summary("Gets value."));
        comment.push_element(DocNode::type_param("T", "The type of T."));
        comment.push_element(DocNode::param("key", "The key."));
        comment.push_element(DocNode::returns("An int."));
        comment
    }

    #[test]
    fn test_render_method_comment() {
        let expected = "/// <summary>\n\
                        /// Gets value.\n\
                        /// </summary>\n\
                        /// <typeparam name=\"T\">The type of T.</typeparam>\n\
                        /// <param name=\"key\">The key.</param>\n\
                        /// <returns>An int.</returns>\n";
        assert_eq!(render(&method_comment(), "\n", ""), expected);
    }

    #[test]
    fn test_render_uses_line_ending_and_indentation() {
        let comment = DocComment::from_nodes(vec![DocNode::summary("Runs.")]);
        assert_eq!(
            render(&comment, "\r\n", "    "),
            "    /// <summary>\r\n    /// Runs.\r\n    /// </summary>\r\n"
        );
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let comment = DocComment::from_nodes(vec![
            DocNode::returns("A list of Dictionary<string, int>."),
            DocNode::NewLine,
            DocNode::exception("Error\"Kind"),
        ]);
        let text = render(&comment, "\n", "");
        assert!(text.contains("<returns>A list of Dictionary&lt;string, int&gt;.</returns>"));
        assert!(text.contains("<exception cref=\"Error&quot;Kind\"></exception>"));
    }

    #[test]
    fn test_render_see_references_and_verbatim_nodes() {
        let comment = DocComment::from_nodes(vec![
            DocNode::Returns {
                content: vec![
                    Inline::text("A "),
                    Inline::See("Task{TResult}".to_string()),
                    Inline::text(" representing the asynchronous operation."),
                ],
            },
            DocNode::NewLine,
            DocNode::Other {
                raw: "<remarks>Kept.</remarks>".to_string(),
            },
        ]);
        assert_eq!(
            render(&comment, "\n", ""),
            "/// <returns>A <see cref=\"Task{TResult}\"/> \
             representing the asynchronous operation.</returns>\n\
             /// <remarks>Kept.</remarks>\n"
        );
    }

    #[test]
    fn test_render_empty_comment() {
        assert_eq!(render(&DocComment::new(), "\n", "  "), "");
    }
}
