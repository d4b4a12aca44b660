//! Opaque function payloads.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A function value.
///
/// The engine never inspects or duplicates the closure; merged outputs carry
/// the same underlying function by reference and it stays invokable there.
/// Equality is by identity.
#[derive(Clone)]
pub struct Callable {
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callable {
    pub fn new(func: impl Fn(&[Value]) -> Value + 'static) -> Callable {
        Callable {
            func: Rc::new(func),
        }
    }

    /// Invoke the function with the given arguments.
    pub fn invoke(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Identity of the underlying closure allocation.
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.func) as *const () as usize
    }

    /// Whether two handles carry the same closure.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:#x})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callable_invoke() {
        let double = Callable::new(|args| match args.first() {
            Some(Value::Int(i)) => Value::Int(i * 2),
            _ => Value::Null,
        });
        assert_eq!(double.invoke(&[Value::from(21)]), Value::from(42));
        assert_eq!(double.invoke(&[]), Value::Null);
    }

    #[test]
    fn test_callable_identity() {
        let a = Callable::new(|_| Value::Null);
        let b = Callable::new(|_| Value::Null);
        let a2 = a.clone();
        assert!(a.ptr_eq(&a2));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.address(), a2.address());
    }
}
