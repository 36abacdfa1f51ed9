/// Early-returns from the enclosing function when a predicate on `$value`
/// holds, optionally mapping the value first. This macro
/// ```ignore
/// return_if!(self.next_batch_outcome() => { is_matched() });
/// ```
///
/// expands to
///
/// ```ignore
/// let res = self.next_batch_outcome();
/// if res.is_matched() {
///     return res;
/// }
/// ```
#[macro_export]
macro_rules! return_if {
    ($value:expr => {$($value_expr:tt)*} map($map_fn:path)) => {
        let res = $value;
        if res.$($value_expr)* {
            return $map_fn(res)
        }
    };
    ($value:expr => {$($value_expr:tt)*}) => {
        let res = $value;
        if res.$($value_expr)* {
            return res
        }
    };
}
