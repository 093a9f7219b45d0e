use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    path::PathBuf,
    rc::Rc,
    sync::Arc,
};

/// Structural arity of a payload: how many values an outcome carries.
///
/// A single value has arity 1 whatever it holds, so an empty `Vec` or a
/// `None` is still one value. Only a bare tag (`()`, [`Values::Empty`], a
/// unit struct) has arity 0. Folds drop arity-0 success payloads instead of
/// accumulating them.
///
/// Any type becomes a single-value payload with an empty impl:
///
/// ```rust
/// use outcomes::{sequence, Outcome::{self, Success}, Payload};
///
/// #[derive(Debug, PartialEq)]
/// enum Color {
///     Red,
///     Blue,
/// }
///
/// impl Payload for Color {}
///
/// let colors: Outcome<Vec<Color>, ()> = sequence(vec![Success(Color::Red), Success(Color::Blue)]);
/// assert_eq!(colors, Success(vec![Color::Red, Color::Blue]));
/// ```
pub trait Payload {
    fn arity(&self) -> usize {
        1
    }
}

impl Payload for () {
    fn arity(&self) -> usize {
        0
    }
}

macro_rules! implement_single_payload {
    ($($ty:ty),*) => {
        $(
            impl Payload for $ty {}
        )*
    };
}

implement_single_payload!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, PathBuf
);

impl<T> Payload for Option<T> {}
impl<T> Payload for Vec<T> {}
impl<T> Payload for VecDeque<T> {}
impl<T, S> Payload for HashSet<T, S> {}
impl<T> Payload for BTreeSet<T> {}
impl<K, V, S> Payload for HashMap<K, V, S> {}
impl<K, V> Payload for BTreeMap<K, V> {}
impl<T, E> Payload for Result<T, E> {}

macro_rules! implement_pointer_payload {
    ($($ptr:ident),*) => {
        $(
            impl<T> Payload for $ptr<T>
            where
                T: Payload + ?Sized,
            {
                fn arity(&self) -> usize {
                    (**self).arity()
                }
            }
        )*
    };
}

implement_pointer_payload!(Box, Rc, Arc);

impl<'a, T> Payload for &'a T
where
    T: Payload + ?Sized,
{
    fn arity(&self) -> usize {
        (**self).arity()
    }
}

macro_rules! implement_tuple_payload {
    ($arity:expr; $($ty:ident),*) => {
        impl<$($ty,)*> Payload for ($($ty,)*) {
            fn arity(&self) -> usize {
                $arity
            }
        }
    };
}

implement_tuple_payload!(1; T1);
implement_tuple_payload!(2; T1, T2);
implement_tuple_payload!(3; T1, T2, T3);
implement_tuple_payload!(4; T1, T2, T3, T4);
implement_tuple_payload!(5; T1, T2, T3, T4, T5);
implement_tuple_payload!(6; T1, T2, T3, T4, T5, T6);
implement_tuple_payload!(7; T1, T2, T3, T4, T5, T6, T7);
implement_tuple_payload!(8; T1, T2, T3, T4, T5, T6, T7, T8);

/// Payload whose arity is only known at runtime.
///
/// Built from a `Vec`, it collapses to its canonical shape:
///
/// ```rust
/// use outcomes::Values;
///
/// assert_eq!(Values::from(Vec::<i32>::new()), Values::Empty);
/// assert_eq!(Values::from(vec![1]), Values::One(1));
/// assert_eq!(Values::from(vec![1, 2]), Values::Many(vec![1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Values<V> {
    Empty,
    One(V),
    Many(Vec<V>),
}

impl<V> Values<V> {
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Values::Empty => vec![],
            Values::One(v) => vec![v],
            Values::Many(vs) => vs,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Values::Empty)
    }
}

impl<V> Default for Values<V> {
    fn default() -> Self {
        Values::Empty
    }
}

impl<V> Payload for Values<V> {
    fn arity(&self) -> usize {
        match self {
            Values::Empty => 0,
            Values::One(_) => 1,
            Values::Many(vs) => vs.len(),
        }
    }
}

impl<V> From<Vec<V>> for Values<V> {
    fn from(mut values: Vec<V>) -> Self {
        match values.len() {
            0 => Values::Empty,
            1 => match values.pop() {
                Some(v) => Values::One(v),
                None => Values::Empty,
            },
            _ => Values::Many(values),
        }
    }
}

impl<V> FromIterator<V> for Values<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<V> From<Values<V>> for Vec<V> {
    fn from(values: Values<V>) -> Self {
        values.into_vec()
    }
}
