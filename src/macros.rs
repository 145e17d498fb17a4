/// Declare a test and add it to the global registry.
///
/// The test is named after the function unless a name is given first:
///
/// ```ignore
/// schooltest::test_case!(fn adds_up() {
///     schooltest::check_eq!(2 + 2, 4);
/// });
///
/// schooltest::test_case!("two numbers equal", fn two_numbers_equal() {
///     schooltest::check_ge!(6, 5);
/// });
/// ```
///
/// Declarations are collected at link time. Their order relative to tests
/// from other compilation units is unspecified.
#[macro_export]
macro_rules! test_case {
    ($(#[$attr:meta])* fn $name:ident() $(-> $ret:ty)? $body:block) => {
        $crate::test_case!(::std::stringify!($name), $(#[$attr])* fn $name() $(-> $ret)? $body);
    };

    ($label:expr, $(#[$attr:meta])* fn $name:ident() $(-> $ret:ty)? $body:block) => {
        $(#[$attr])*
        fn $name() $(-> $ret)? $body

        const _: () = {
            fn run() -> $crate::test::TestResult {
                $crate::test::TestResult::from($name())
            }

            #[$crate::__private::linkme::distributed_slice($crate::registry::STATIC_TESTS)]
            #[linkme(crate = $crate::__private::linkme)]
            static TEST: $crate::test::StaticTest = $crate::test::StaticTest::new($label, run);
        };
    };
}

/// Check that a condition holds.
#[macro_export]
macro_rules! check {
    ($condition:expr $(,)?) => {
        $crate::assertion::check($condition, ::std::stringify!($condition))
    };
}

/// Check that a condition does not hold.
#[macro_export]
macro_rules! check_false {
    ($condition:expr $(,)?) => {
        $crate::assertion::check_false($condition, ::std::stringify!($condition))
    };
}

/// Check `lhs == rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_eq(&$lhs, &$rhs)
    };
}

/// Check `lhs != rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_ne(&$lhs, &$rhs)
    };
}

/// Check `lhs < rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_lt(&$lhs, &$rhs)
    };
}

/// Check `lhs <= rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_le(&$lhs, &$rhs)
    };
}

/// Check `lhs > rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_gt(&$lhs, &$rhs)
    };
}

/// Check `lhs >= rhs`, rendering both operands on failure.
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::check_ge(&$lhs, &$rhs)
    };
}
