/// Generates `lines` lines of minified-looking code, optionally followed by a comment.
pub fn generate_code(lines: usize, comment: Option<&str>) -> String {
    let mut code = String::new();
    for idx in 0..lines {
        code.push_str(&format!(
            "var a{idx}=function(b,c){{return b/c*{idx}}};/* block {idx} */// line {idx}\n"
        ));
    }
    if let Some(comment) = comment {
        code.push_str(comment);
    }
    code
}
