/// Build a [`Registry`](crate::Registry) from a list of instances, each stored
/// under its own runtime type
///
/// ```ignore
/// let registry = registry![RedThing, GreenThing, BlueThing];
/// ```
#[macro_export]
macro_rules! registry {
    () => {
        $crate::Registry::new()
    };
    ($($instance:expr),+ $(,)?) => {
        $crate::Registry::new()$(.with($instance))+
    };
}
