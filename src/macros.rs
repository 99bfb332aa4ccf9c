/// Builds a [`Rope`](crate::Rope) from chunk expressions, one leaf per
/// non-empty chunk.
///
/// ```
/// let rope = ropebuf::rope!["line1\n", "li", "ne2"];
/// assert_eq!(rope.line_count(), 2);
/// assert_eq!(ropebuf::rope![].len(), 0);
/// ```
#[macro_export]
macro_rules! rope {
    () => {
        $crate::Rope::new()
    };

    ($($chunk:expr),+ $(,)?) => {{
        let mut builder = $crate::RopeBuilder::new();
        $(
            builder.push($chunk);
        )+
        builder.finish()
    }};
}
