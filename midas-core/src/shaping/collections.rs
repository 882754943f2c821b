use std::collections::BTreeMap;

use midas_types::{FieldValue, NameValue, Row};

/// Linear membership test.
#[must_use]
pub fn is_in_array<T: PartialEq>(values: &[T], needle: &T) -> bool {
    values.contains(needle)
}

/// Remove the first element equal to `needle`, in place.
///
/// Returns the same vector so calls can be chained. Later duplicates are left
/// alone; a missing `needle` leaves the vector unchanged.
///
/// ```
/// use midas_core::remove_first_occurrence;
///
/// let mut v = vec![1, 2, 3, 2];
/// remove_first_occurrence(&mut v, &2);
/// assert_eq!(v, [1, 3, 2]);
/// ```
pub fn remove_first_occurrence<'a, T: PartialEq>(values: &'a mut Vec<T>, needle: &T) -> &'a mut Vec<T> {
    if let Some(pos) = values.iter().position(|v| v == needle) {
        values.remove(pos);
    }
    values
}

/// Map each string to itself, e.g. to build a lookup of selectable series names.
#[must_use]
pub fn array_to_identity_map<S: AsRef<str>>(values: &[S]) -> BTreeMap<String, String> {
    values
        .iter()
        .map(|v| (v.as_ref().to_owned(), v.as_ref().to_owned()))
        .collect()
}

/// Keys of a record other than `date`, in key order.
#[must_use]
pub fn object_keys_excluding_date<V>(record: &BTreeMap<String, V>) -> Vec<String> {
    record.keys().filter(|k| *k != "date").cloned().collect()
}

/// Flatten a record into `{name, value}` pairs for property lists.
///
/// Keys starting with `$` (framework bookkeeping) and the key `toJSON` are
/// skipped.
#[must_use]
pub fn object_to_name_value_list(record: &Row) -> Vec<NameValue> {
    record
        .iter()
        .filter(|(k, _)| !(k.starts_with('$') || *k == "toJSON"))
        .map(|(k, v)| NameValue {
            name: k.clone(),
            value: v.clone(),
        })
        .collect()
}

/// `[0, 1, ..., len - 1]`, used as a default x axis.
#[must_use]
pub fn range_array(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Join `text` to every label with a single space, before or after it.
///
/// ```
/// use midas_core::label_concat;
///
/// assert_eq!(label_concat(&["IF1601"], "close", false), vec!["IF1601 close"]);
/// assert_eq!(label_concat(&["IF1601"], "close", true), vec!["close IF1601"]);
/// ```
#[must_use]
pub fn label_concat<S: AsRef<str>>(labels: &[S], text: &str, before: bool) -> Vec<String> {
    labels
        .iter()
        .map(|l| {
            if before {
                format!("{text} {}", l.as_ref())
            } else {
                format!("{} {text}", l.as_ref())
            }
        })
        .collect()
}

/// Values that can be "empty" for the purpose of [`is_any_empty!`](crate::is_any_empty).
///
/// `None`, the empty string, empty sequences and `FieldValue::Null` are
/// empty. Numbers and booleans never are.
pub trait Emptiness {
    /// Whether this value counts as missing.
    fn is_empty_value(&self) -> bool;
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for FieldValue {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}

macro_rules! never_empty {
    ($($t:ty),*) => {
        $(impl Emptiness for $t {
            fn is_empty_value(&self) -> bool {
                false
            }
        })*
    };
}

never_empty!(bool, i32, i64, u32, u64, usize, f64);

/// True if any argument is empty per [`Emptiness`].
///
/// ```
/// use midas_core::is_any_empty;
///
/// let symbol = "IF1601";
/// let prices: Vec<f64> = vec![];
/// assert!(is_any_empty!(symbol, prices));
/// assert!(!is_any_empty!(symbol, Some(3.5)));
/// ```
#[macro_export]
macro_rules! is_any_empty {
    ($($value:expr),+ $(,)?) => {
        false $(|| $crate::Emptiness::is_empty_value(&$value))+
    };
}
