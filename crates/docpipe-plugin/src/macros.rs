//! Convenience macros for plugin development.

/// Exports a plugin type from a `cdylib` so the dynamic loader can find it.
///
/// Generates the `create_plugin` symbol the loader looks up. The constructor
/// is any path or closure-free expression returning the plugin value.
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Default)]
/// struct Banner;
///
/// impl Plugin for Banner {
///     fn name(&self) -> &str { "banner" }
///     fn registered_hooks(&self) -> Vec<HookPoint> { vec![HookPoint::OnHandleCode] }
/// }
///
/// declare_plugin!(Banner, Banner::default);
/// ```
#[macro_export]
macro_rules! declare_plugin {
    ($plugin_type:ty, $constructor:path) => {
        #[unsafe(no_mangle)]
        #[allow(improper_ctypes_definitions)]
        pub extern "C" fn create_plugin() -> *mut dyn $crate::traits::Plugin {
            let constructor: fn() -> $plugin_type = $constructor;
            let plugin: Box<dyn $crate::traits::Plugin> = Box::new(constructor());
            Box::into_raw(plugin)
        }
    };
}

/// Builds a `Vec<PluginEntry>` from `name => option` pairs.
///
/// # Example
/// ```rust,ignore
/// let plugins = plugin_entries![
///     "exclude-private",
///     "inject-script" => json!({"scripts": ["./a.js"]}),
/// ];
/// ```
#[macro_export]
macro_rules! plugin_entries {
    () => {
        Vec::<$crate::prelude::PluginEntry>::new()
    };
    ($($name:literal $(=> $option:expr)?),+ $(,)?) => {
        vec![
            $(
                $crate::prelude::PluginEntry::new($name)
                    $(.with_option($option))?
            ),+
        ]
    };
}
