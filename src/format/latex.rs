/// Cosmetic LaTeX rendering of a plain result string. Only substitutes symbols;
/// real typesetting is left to the host.
pub fn latex_hint(text: &str) -> String {
    text.replace('*', "")
        .replace("sqrt", "\\sqrt")
        .replace("pi", "\\pi")
        .replace("inf", "\\infty")
}
