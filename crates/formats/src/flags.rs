bitflags::bitflags! {
	/// Capabilities a result format provides.
	///
	/// Computed at registration from the hooks a plugin installed; plugins
	/// never set these directly.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct FormatFlags: u32 {
		/// Can parse results into rows.
		const READER = 1 << 0;
		/// Can serialize results.
		const WRITER = 1 << 1;
	}
}

impl FormatFlags {
	/// Whether a factory with `self` passes a lookup filter.
	///
	/// An empty filter accepts everything; otherwise the flags must be equal,
	/// so asking for a reader skips formats that both read and write.
	pub fn matches_filter(self, filter: FormatFlags) -> bool {
		filter.is_empty() || self == filter
	}
}

impl std::fmt::Display for FormatFlags {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let read = if self.contains(Self::READER) { 'r' } else { '-' };
		let write = if self.contains(Self::WRITER) { 'w' } else { '-' };
		write!(f, "{read}{write}")
	}
}
