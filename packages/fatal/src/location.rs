use derive_more::Display;

/// Identifies the source location that detected a fault.
///
/// Create one with the [`here!`][crate::here] macro, which fills in the file, line and name of the
/// enclosing function automatically.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{file}:{line}:{function}()")]
pub struct Location {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl Location {
    /// Creates a location from its parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The source file that detected the fault.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line in the source file that detected the fault.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The bare name of the function that detected the fault.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }
}

/// Reduces the type name of an item nested inside a function to the bare name of that function.
///
/// `here!` declares a nested `fn` and passes its type name here, e.g.
/// `my_crate::module::my_function::{{closure}}::marker` becomes `my_function`.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function_name(nested_item_path: &'static str) -> &'static str {
    let mut path = nested_item_path
        .strip_suffix("::marker")
        .unwrap_or(nested_item_path);

    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }

    path.rsplit("::").next().unwrap_or(path)
}

/// Captures the [`Location`] of the macro invocation: file, line and enclosing function.
#[macro_export]
macro_rules! here {
    () => {{
        fn marker() {}

        $crate::Location::new(
            ::std::file!(),
            ::std::line!(),
            $crate::enclosing_function_name(::std::any::type_name_of_val(&marker)),
        )
    }};
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Location: Send, Sync, Copy);

    #[test]
    fn here_captures_enclosing_function() {
        let location = here!();

        assert_eq!(location.function(), "here_captures_enclosing_function");
        assert_eq!(location.file(), file!());
        assert!(location.line() > 0);
    }

    #[test]
    fn here_ignores_closures() {
        let capture = || here!();

        assert_eq!(capture().function(), "here_ignores_closures");
    }

    #[test]
    fn enclosing_function_name_strips_nesting() {
        assert_eq!(
            enclosing_function_name("krate::module::outer::marker"),
            "outer"
        );
        assert_eq!(
            enclosing_function_name("krate::outer::{{closure}}::{{closure}}::marker"),
            "outer"
        );
        assert_eq!(enclosing_function_name("main::marker"), "main");
    }

    #[test]
    fn displays_as_diagnostic_prefix() {
        let location = Location::new("tests/add.rs", 17, "small_sums");

        assert_eq!(location.to_string(), "tests/add.rs:17:small_sums()");
    }
}
