use crate::error::RegistrationError;
use crate::factory::FormatFactoryBuilder;

/// A result format contributed at link time.
///
/// Submit with `inventory::submit!`; [`crate::FormatRegistry::register_plugins`]
/// runs every submitted plugin. Plugins can also be registered one at a time
/// through [`crate::FormatRegistry::register_plugin`].
pub struct FormatPlugin {
	/// Plugin name, used in logs and in the `disabled` configuration list.
	pub name: &'static str,
	/// Higher priorities register first, which makes the highest-priority
	/// format the registry default.
	pub priority: i16,
	/// Fills in the factory for this plugin's format.
	pub register: fn(&mut FormatFactoryBuilder) -> Result<(), RegistrationError>,
}

inventory::collect!(FormatPlugin);

impl FormatPlugin {
	/// Creates a new plugin definition.
	pub const fn new(
		name: &'static str,
		priority: i16,
		register: fn(&mut FormatFactoryBuilder) -> Result<(), RegistrationError>,
	) -> Self {
		Self {
			name,
			priority,
			register,
		}
	}
}

impl std::fmt::Debug for FormatPlugin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormatPlugin")
			.field("name", &self.name)
			.field("priority", &self.priority)
			.finish_non_exhaustive()
	}
}
