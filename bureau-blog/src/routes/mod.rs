/// Route handlers
///
/// - `posts`: the whole blog surface (list, add, edit, delete, view)

pub mod posts;
