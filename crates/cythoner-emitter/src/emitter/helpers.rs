/// `n` spaces of indentation.
pub(super) fn space(n: u32) -> String {
    " ".repeat(n as usize)
}

/// Render each item and join the results with `, `.
pub(super) fn comma_join<T, E>(
    items: impl IntoIterator<Item = T>,
    mut render: impl FnMut(T) -> Result<String, E>,
) -> Result<String, E> {
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render(item)?);
    }
    Ok(out)
}
