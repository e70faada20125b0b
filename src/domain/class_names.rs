//! Conditional class-name joining.
//!
//! Flattens heterogeneous descriptors into a single space separated string of
//! active class names. Descriptors are modelled as a tagged [`ClassValue`]
//! rather than inspected dynamically.
//!
//! Processing is recursive and in argument order:
//! - falsy values (`false`, null, `0`, NaN, `""`) are skipped
//! - strings contribute themselves, numbers their decimal form (integers
//!   exactly, floats in their shortest round-trip form)
//! - lists are flattened element by element
//! - dictionaries contribute each key whose value is truthy, in insertion order
//!
//! Names are never deduplicated, trimmed or validated.
//!
//! # Example
//! ```
//! use utilkit::{class_names, ClassDictionary};
//!
//! let active = true;
//! let classes = class_names!(
//!     "btn",
//!     ClassDictionary::new().with("btn-active", active).with("btn-disabled", false),
//!     vec!["icon", ""],
//!     None::<&str>,
//! );
//! assert_eq!(classes, "btn btn-active icon");
//! ```

use std::fmt;

/// A single class descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// A literal class name. Empty strings are falsy.
    Str(String),
    /// An integer literal, rendered exactly. `0` is falsy.
    Int(i128),
    /// A floating point literal. `0`, `-0` and NaN are falsy.
    Number(f64),
    /// A boolean. Contributes nothing either way, but `true` is truthy as a
    /// dictionary value.
    Bool(bool),
    /// Absent value (null or undefined).
    Null,
    /// Nested descriptors, flattened in order.
    List(Vec<ClassValue>),
    /// Conditional names keyed by class name.
    Map(ClassDictionary),
}

impl ClassValue {
    /// Whether this value counts as "on".
    ///
    /// Lists and dictionaries are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Str(s) => !s.is_empty(),
            ClassValue::Int(n) => *n != 0,
            ClassValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ClassValue::Bool(b) => *b,
            ClassValue::Null => false,
            ClassValue::List(_) | ClassValue::Map(_) => true,
        }
    }

    fn collect_into(&self, classes: &mut Vec<String>) {
        if !self.is_truthy() {
            return;
        }

        match self {
            ClassValue::Str(s) => classes.push(s.clone()),
            ClassValue::Int(n) => classes.push(n.to_string()),
            ClassValue::Number(n) => classes.push(format_number(*n)),
            ClassValue::List(items) => {
                for item in items {
                    item.collect_into(classes);
                }
            }
            ClassValue::Map(dict) => {
                for (key, value) in dict.iter() {
                    if value.is_truthy() {
                        classes.push(key.to_string());
                    }
                }
            }
            // `true` on its own names nothing
            ClassValue::Bool(_) | ClassValue::Null => {}
        }
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_class_names([self.clone()]))
    }
}

/// Render a float the way it would appear as a class name.
///
/// Uses the shortest digits that round-trip. Plain decimal notation is used
/// for magnitudes in `[1e-6, 1e21)`, exponent notation (`1e+21`, `1.5e-7`)
/// outside it.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return n.to_string(),
        },
        None => return n.to_string(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exp_sign = if exponent >= 0 { "+" } else { "-" };
        format!("{}e{}{}", mantissa, exp_sign, exponent.abs())
    };
    format!("{}{}", sign, body)
}

/// Ordered mapping from class name to condition.
///
/// Keeps insertion order. Re-inserting an existing key replaces its value but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDictionary {
    entries: Vec<(String, ClassValue)>,
}

impl ClassDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the condition for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ClassValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ClassValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up the condition for `key`.
    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ClassDictionary
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = ClassDictionary::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Null
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Number(value)
    }
}

impl From<f32> for ClassValue {
    fn from(value: f32) -> Self {
        ClassValue::Number(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    ClassValue::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for ClassValue {
    fn from(value: isize) -> Self {
        ClassValue::Int(value as i128)
    }
}

impl From<usize> for ClassValue {
    fn from(value: usize) -> Self {
        ClassValue::Int(value as i128)
    }
}

impl From<u128> for ClassValue {
    fn from(value: u128) -> Self {
        // Above `i128::MAX` the value is nonzero, so its text form is
        // equivalent
        i128::try_from(value)
            .map(ClassValue::Int)
            .unwrap_or_else(|_| ClassValue::Str(value.to_string()))
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Null, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(value: Vec<T>) -> Self {
        ClassValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(value: [T; N]) -> Self {
        ClassValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<ClassDictionary> for ClassValue {
    fn from(value: ClassDictionary) -> Self {
        ClassValue::Map(value)
    }
}

/// Join the active class names of `descriptors` with single spaces.
///
/// ```
/// use utilkit::{join_class_names, ClassValue};
///
/// let parts: Vec<ClassValue> = vec!["foo".into(), 0.into(), "bar".into()];
/// assert_eq!(join_class_names(parts), "foo bar");
/// ```
pub fn join_class_names<I>(descriptors: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut classes = Vec::new();
    for descriptor in descriptors {
        descriptor.into().collect_into(&mut classes);
    }
    classes.join(" ")
}

/// Variadic form of [`join_class_names`] accepting mixed descriptor types.
///
/// ```
/// use utilkit::class_names;
///
/// assert_eq!(class_names!("foo", "bar"), "foo bar");
/// assert_eq!(class_names!(), "");
/// ```
#[macro_export]
macro_rules! class_names {
    ($($descriptor:expr),* $(,)?) => {
        {
            let descriptors: ::std::vec::Vec<$crate::ClassValue> =
                ::std::vec![$($crate::ClassValue::from($descriptor)),*];
            $crate::join_class_names(descriptors)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict<const N: usize>(entries: [(&str, ClassValue); N]) -> ClassDictionary {
        entries.into_iter().collect()
    }

    #[test]
    fn test_strings() {
        assert_eq!(class_names!("foo", "bar"), "foo bar");
    }

    #[test]
    fn test_string_and_dictionary() {
        assert_eq!(
            class_names!("foo", dict([("bar", true.into())])),
            "foo bar"
        );
    }

    #[test]
    fn test_hyphenated_keys() {
        assert_eq!(class_names!(dict([("foo-bar", true.into())])), "foo-bar");
        assert_eq!(class_names!(dict([("foo-bar", false.into())])), "");
    }

    #[test]
    fn test_multiple_dictionaries() {
        assert_eq!(
            class_names!(dict([("foo", true.into())]), dict([("bar", true.into())])),
            "foo bar"
        );
        assert_eq!(
            class_names!(dict([("foo", true.into()), ("bar", true.into())])),
            "foo bar"
        );
    }

    #[test]
    fn test_dictionary_filters_falsy_values() {
        let d = dict([
            ("foo", true.into()),
            ("bar", false.into()),
            ("qux", true.into()),
        ]);
        assert_eq!(class_names!(d), "foo qux");
    }

    #[test]
    fn test_falsy_descriptors_skipped() {
        let result = class_names!(
            ClassValue::Null,
            false,
            "bar",
            (),
            dict([("baz", ClassValue::Null)]),
            ""
        );
        assert_eq!(result, "bar");
    }

    #[test]
    fn test_nested_lists() {
        let nested = ClassValue::List(vec![
            "b".into(),
            dict([("c", true.into()), ("d", false.into())]).into(),
        ]);
        assert_eq!(class_names!("a", nested), "a b c");
    }

    #[test]
    fn test_deep_nesting() {
        let deep = vec![vec![vec!["x"], vec!["y", ""]], vec![vec!["z"]]];
        assert_eq!(class_names!(deep), "x y z");
    }

    #[test]
    fn test_order_preserved_not_sorted() {
        assert_eq!(
            class_names!(dict([("b", true.into())]), dict([("a", true.into())])),
            "b a"
        );
    }

    #[test]
    fn test_no_deduplication() {
        assert_eq!(class_names!("a", "a", vec!["a"]), "a a a");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(class_names!(0, 1, 2.5, -3), "1 2.5 -3");
        assert_eq!(class_names!(f64::NAN, -0.0), "");
        assert_eq!(class_names!(f64::INFINITY), "Infinity");
        assert_eq!(class_names!(1e3), "1000");
    }

    #[test]
    fn test_large_integers_render_exactly() {
        assert_eq!(class_names!(9_007_199_254_740_993u64), "9007199254740993");
        assert_eq!(class_names!(u64::MAX), u64::MAX.to_string());
        assert_eq!(class_names!(i128::MIN), i128::MIN.to_string());
        assert_eq!(class_names!(u128::MAX), u128::MAX.to_string());
        assert_eq!(class_names!(0u64, 0i128, 0u128, 0usize), "");
        assert!(!ClassValue::Int(0).is_truthy());
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(class_names!(1e21), "1e+21");
        assert_eq!(class_names!(1.5e300), "1.5e+300");
        assert_eq!(class_names!(-1e21), "-1e+21");
        assert_eq!(class_names!(1e-7), "1e-7");
        assert_eq!(class_names!(2.5e-8), "2.5e-8");
        assert_eq!(class_names!(1e20), "100000000000000000000");
        assert_eq!(class_names!(0.000001), "0.000001");
        assert_eq!(class_names!(0.1), "0.1");
        assert_eq!(class_names!(123.456), "123.456");
    }

    #[test]
    fn test_true_alone_contributes_nothing() {
        assert_eq!(class_names!(true, "x"), "x");
    }

    #[test]
    fn test_empty_containers_are_truthy_values() {
        let d = dict([
            ("list", ClassValue::List(Vec::new())),
            ("map", ClassDictionary::new().into()),
            ("zero", 0.into()),
            ("text", "yes".into()),
        ]);
        assert_eq!(class_names!(d), "list map text");
    }

    #[test]
    fn test_keys_not_validated() {
        let d = dict([("  ", true.into()), ("ok", true.into())]);
        assert_eq!(class_names!(d), "   ok");
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut d = ClassDictionary::new();
        d.insert("first", false);
        d.insert("second", true);
        d.insert("first", true);
        assert_eq!(d.len(), 2);
        assert_eq!(d.get("first"), Some(&ClassValue::Bool(true)));
        assert_eq!(class_names!(d), "first second");
    }

    #[test]
    fn test_options() {
        assert_eq!(class_names!(Some("on"), None::<&str>), "on");
    }

    #[test]
    fn test_owned_strings() {
        let name = String::from("dyn");
        assert_eq!(class_names!(&name, name.clone()), "dyn dyn");
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(class_names!(), "");
        assert_eq!(join_class_names(Vec::<ClassValue>::new()), "");
    }

    #[test]
    fn test_display() {
        let value: ClassValue = vec!["a", "", "b"].into();
        assert_eq!(value.to_string(), "a b");
    }

    #[test]
    fn test_is_truthy() {
        assert!(!ClassValue::Null.is_truthy());
        assert!(!ClassValue::from("").is_truthy());
        assert!(!ClassValue::from(0).is_truthy());
        assert!(ClassValue::from(" ").is_truthy());
        assert!(ClassValue::List(Vec::new()).is_truthy());
        assert!(ClassValue::Map(ClassDictionary::new()).is_truthy());
    }
}
