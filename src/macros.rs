#[macro_export]
macro_rules! attrs {
    // Handle empty map
    () => {
        $crate::AttrMap::new()
    };

    // Handle key/value pairs
    ( $( $key:literal : $value:tt ),* $(,)? ) => {{
        let mut map = $crate::AttrMap::new();
        $(
            map.insert($key.to_string(), $crate::attrs!(@value $value));
        )*
        map
    }};

    // null marks an attribute present without a value
    (@value null) => {
        ::core::option::Option::None
    };

    // Any other value is converted to its string form
    (@value $value:expr) => {
        ::core::option::Option::Some($value.to_string())
    };
}
