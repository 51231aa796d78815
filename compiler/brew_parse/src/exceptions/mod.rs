//! Well-known exception hierarchy for multi-catch checks.
//!
//! The parser has no type information, so it only knows the throwable
//! classes of `java.lang` and `java.io`. Names are compared by their last
//! segment: `java.io.IOException` and `IOException` are the same class.

/// Direct superclass of a well-known throwable class.
fn superclass(simple_name: &str) -> Option<&'static str> {
    let parent = match simple_name {
        "Exception" | "Error" => "Throwable",

        "RuntimeException"
        | "IOException"
        | "ReflectiveOperationException"
        | "InterruptedException"
        | "CloneNotSupportedException" => "Exception",

        "ArithmeticException"
        | "NullPointerException"
        | "IllegalArgumentException"
        | "IllegalStateException"
        | "IndexOutOfBoundsException"
        | "ClassCastException"
        | "UnsupportedOperationException"
        | "ArrayStoreException"
        | "NegativeArraySizeException"
        | "SecurityException"
        | "EnumConstantNotPresentException"
        | "TypeNotPresentException"
        | "UncheckedIOException" => "RuntimeException",

        "NumberFormatException" | "IllegalThreadStateException" => "IllegalArgumentException",
        "ArrayIndexOutOfBoundsException" | "StringIndexOutOfBoundsException" => {
            "IndexOutOfBoundsException"
        }

        "ClassNotFoundException"
        | "InstantiationException"
        | "IllegalAccessException"
        | "NoSuchMethodException"
        | "NoSuchFieldException" => "ReflectiveOperationException",

        "FileNotFoundException"
        | "EOFException"
        | "UnsupportedEncodingException"
        | "InterruptedIOException"
        | "CharConversionException"
        | "ObjectStreamException"
        | "UTFDataFormatException"
        | "SyncFailedException" => "IOException",

        "InvalidClassException"
        | "InvalidObjectException"
        | "NotSerializableException"
        | "StreamCorruptedException"
        | "OptionalDataException"
        | "NotActiveException"
        | "WriteAbortedException" => "ObjectStreamException",

        "AssertionError" | "LinkageError" | "VirtualMachineError" | "IOError" => "Error",
        "OutOfMemoryError" | "StackOverflowError" | "InternalError" | "UnknownError" => {
            "VirtualMachineError"
        }
        "NoClassDefFoundError"
        | "ExceptionInInitializerError"
        | "ClassFormatError"
        | "UnsatisfiedLinkError"
        | "IncompatibleClassChangeError"
        | "BootstrapMethodError"
        | "VerifyError"
        | "ClassCircularityError" => "LinkageError",
        "NoSuchFieldError"
        | "NoSuchMethodError"
        | "AbstractMethodError"
        | "IllegalAccessError"
        | "InstantiationError" => "IncompatibleClassChangeError",

        _ => return None,
    };
    Some(parent)
}

/// Last segment of a possibly qualified class name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// True if `sub` is a proper subclass of `sup` according to the table.
pub fn is_subclass(sub: &str, sup: &str) -> bool {
    let sup = simple_name(sup);
    let mut current = simple_name(sub);
    while let Some(parent) = superclass(current) {
        if parent == sup {
            return true;
        }
        current = parent;
    }
    false
}

/// Why an alternative of a multi-catch is redundant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Redundancy {
    /// The same class is listed twice; `index` is the earlier occurrence.
    Duplicate { index: usize },
    /// The class at `index` is a superclass of this one.
    Subclass { index: usize },
    /// This class is a superclass of the one at `index`.
    Superclass { index: usize },
}

/// Check each alternative of a multi-catch against the ones before it.
///
/// Returns `(position, reason)` for every redundant alternative, in order.
pub fn redundant_alternatives(names: &[&str]) -> Vec<(usize, Redundancy)> {
    let mut found = Vec::new();
    for (i, &name) in names.iter().enumerate() {
        let earlier = names[..i].iter().enumerate();
        let reason = earlier.map(|(j, &prev)| {
            if simple_name(prev) == simple_name(name) {
                Some(Redundancy::Duplicate { index: j })
            } else if is_subclass(name, prev) {
                Some(Redundancy::Subclass { index: j })
            } else if is_subclass(prev, name) {
                Some(Redundancy::Superclass { index: j })
            } else {
                None
            }
        });
        if let Some(reason) = reason.flatten().next() {
            found.push((i, reason));
        }
    }
    found
}
