use std::cmp::Ordering;

/// Sort key of a generated struct field.
pub(crate) trait FieldOrder {
  fn wire_name(&self) -> &str;

  fn is_required(&self) -> bool;

  /// Position in the owning method's `parameterOrder`, for parameters listed there.
  fn declared_position(&self) -> Option<usize> {
    None
  }
}

/// Required before optional. Required entries with a declared position come first, in that
/// position order. Everything else falls back to the wire name.
pub(crate) fn compare_fields<T: FieldOrder>(a: &T, b: &T) -> Ordering {
  b.is_required()
    .cmp(&a.is_required())
    .then_with(|| {
      if !a.is_required() {
        return Ordering::Equal;
      }
      match (a.declared_position(), b.declared_position()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
      }
    })
    .then_with(|| a.wire_name().cmp(b.wire_name()))
}

pub(crate) fn sort_fields<T: FieldOrder>(fields: &mut [T]) {
  fields.sort_by(compare_fields);
}
