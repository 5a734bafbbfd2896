//! Ordered collection of result format factories.

use url::Url;

use crate::config::FormatsConfig;
use crate::description::FormatDescription;
use crate::error::RegistrationError;
use crate::factory::{FormatFactory, FormatFactoryBuilder};
use crate::flags::FormatFlags;
use crate::plugin::FormatPlugin;
use crate::sniff::DEFAULT_SNIFF_WINDOW;

/// Criteria for [`FormatRegistry::lookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatQuery<'a> {
	pub name: Option<&'a str>,
	pub uri: Option<&'a Url>,
	pub mime_type: Option<&'a str>,
	/// Required capabilities; empty accepts any format.
	pub flags: FormatFlags,
}

impl<'a> FormatQuery<'a> {
	/// No criteria; resolves to the default format.
	pub fn any() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: &'a str) -> Self {
		self.name = Some(name);
		self
	}

	pub fn uri(mut self, uri: &'a Url) -> Self {
		self.uri = Some(uri);
		self
	}

	pub fn mime_type(mut self, mime_type: &'a str) -> Self {
		self.mime_type = Some(mime_type);
		self
	}

	pub fn flags(mut self, flags: FormatFlags) -> Self {
		self.flags = flags;
		self
	}

	/// Without a name or URI the lookup resolves to the default format.
	fn wants_default(&self) -> bool {
		self.name.is_none() && self.uri.is_none()
	}
}

impl std::fmt::Display for FormatQuery<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut sep = "";
		if let Some(name) = self.name {
			write!(f, "name={name:?}")?;
			sep = " ";
		}
		if let Some(uri) = self.uri {
			write!(f, "{sep}uri={uri}")?;
			sep = " ";
		}
		if let Some(mime) = self.mime_type {
			write!(f, "{sep}mime={mime}")?;
			sep = " ";
		}
		if !self.flags.is_empty() {
			write!(f, "{sep}flags={}", self.flags)?;
			sep = " ";
		}
		if sep.is_empty() {
			f.write_str("default")?;
		}
		Ok(())
	}
}

/// Registered result formats, in registration order.
///
/// Built once when the owning context initializes and read-only afterwards.
/// Registration order matters: the first format is the default and ties in
/// content sniffing resolve towards earlier formats.
#[derive(Debug)]
pub struct FormatRegistry {
	factories: Vec<FormatFactory>,
	sniff_window: usize,
}

impl Default for FormatRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl FormatRegistry {
	/// Empty registry with the default sniff window.
	pub fn new() -> Self {
		Self {
			factories: Vec::new(),
			sniff_window: DEFAULT_SNIFF_WINDOW,
		}
	}

	pub fn with_config(config: &FormatsConfig) -> Self {
		Self {
			factories: Vec::new(),
			sniff_window: config.sniff_window,
		}
	}

	/// Bytes of content shown to sniffers.
	pub fn sniff_window(&self) -> usize {
		self.sniff_window
	}

	/// Registers one format.
	///
	/// `register` fills in a fresh [`FormatFactoryBuilder`]. If it fails, or
	/// leaves out a name or label, nothing is added.
	pub fn register<F>(&mut self, register: F) -> Result<&FormatFactory, RegistrationError>
	where
		F: FnOnce(&mut FormatFactoryBuilder) -> Result<(), RegistrationError>,
	{
		let mut builder = FormatFactoryBuilder::new();
		register(&mut builder)?;
		let factory = builder.build()?;

		tracing::debug!(
			format = factory.name(),
			flags = %factory.flags(),
			context_length = factory.context_length(),
			"registered result format"
		);
		self.factories.push(factory);
		Ok(&self.factories[self.factories.len() - 1])
	}

	/// Registers a plugin, attributing failures to it.
	pub fn register_plugin(&mut self, plugin: &FormatPlugin) -> Result<&FormatFactory, RegistrationError> {
		self.register(|builder| {
			(plugin.register)(builder).map_err(|err| match err {
				RegistrationError::Plugin { .. } => err,
				other => RegistrationError::Plugin {
					plugin: plugin.name.to_owned(),
					message: other.to_string(),
				},
			})
		})
	}

	/// Registers every plugin submitted through `inventory`.
	///
	/// Plugins run by descending priority, then name. Plugins the config
	/// disables are skipped. A failing plugin is logged and skipped; the rest
	/// still register. Returns the failures.
	pub fn register_plugins(&mut self, config: &FormatsConfig) -> Vec<RegistrationError> {
		let mut plugins: Vec<&'static FormatPlugin> = inventory::iter::<FormatPlugin>().collect();
		plugins.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.name.cmp(b.name)));

		for name in &config.disabled {
			if !plugins.iter().any(|plugin| plugin.name == name) {
				tracing::warn!(plugin = %name, "disabled result format plugin is not registered");
			}
		}

		let mut failures = Vec::new();
		for plugin in plugins {
			if config.is_disabled(plugin.name) {
				tracing::debug!(plugin = plugin.name, "result format plugin disabled");
				continue;
			}
			if let Err(err) = self.register_plugin(plugin) {
				tracing::error!(plugin = plugin.name, error = %err, "result format plugin rejected");
				failures.push(err);
			}
		}
		failures
	}

	/// Finds the format matching `query`.
	///
	/// Formats are scanned in registration order, skipping those whose flags
	/// differ from a non-empty `query.flags`. Without a name or URI the first
	/// remaining format is returned, whatever the MIME type. Otherwise a
	/// format matches by any declared name, then any declared syntax URI,
	/// then any declared MIME type, all compared exactly.
	///
	/// Returns `None` when nothing matches; there is no fallback format.
	pub fn lookup(&self, query: &FormatQuery<'_>) -> Option<&FormatFactory> {
		let uri = query.uri.map(Url::as_str);

		self.factories
			.iter()
			.filter(|factory| factory.flags().matches_filter(query.flags))
			.find(|factory| {
				let desc = factory.description();
				query.wants_default()
					|| query.name.is_some_and(|name| desc.has_name(name))
					|| uri.is_some_and(|uri| desc.has_uri(uri))
					|| query.mime_type.is_some_and(|mime| desc.mime_type(mime).is_some())
			})
	}

	/// Whether any format matches `query`.
	pub fn check(&self, query: &FormatQuery<'_>) -> bool {
		self.lookup(query).is_some()
	}

	/// Description of the format at registration position `index`.
	pub fn describe(&self, index: usize) -> Option<&FormatDescription> {
		self.factories.get(index).map(FormatFactory::description)
	}

	/// Descriptions of all formats in registration order.
	pub fn descriptions(&self) -> impl Iterator<Item = &FormatDescription> {
		self.factories.iter().map(FormatFactory::description)
	}

	pub fn factories(&self) -> impl Iterator<Item = &FormatFactory> {
		self.factories.iter()
	}

	pub fn len(&self) -> usize {
		self.factories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}
