#[macro_export]
macro_rules! min {
    ( $a:expr $(, $tail:expr)+ ) => ({
        // ::core::cmp::min($a, min!($($tail),*))
        let other = min!($($tail),+);
        if $a < other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[macro_export]
macro_rules! max {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let other = max!($($tail),+);
        if $a > other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn test_min_max() {
        assert_eq!(min!(3, 1, 2), 1);
        assert_eq!(max!(3, 1, 2), 3);
        assert_eq!(min!(-7), -7);
    }
}
