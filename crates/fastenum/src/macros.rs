/// Declares a newtype enumeration backed by named integer constants.
///
/// Unlike a Rust `enum`, several constants may share one value (aliases). The first declaration
/// of a value is the one reported by value lookups. A trailing `=> "label"` attaches a display
/// label to a constant. A leading `#[flags]` sets the flags marker and must come before any other
/// attribute.
///
/// ```ignore
/// fastenum::constants! {
///     #[flags]
///     /// File permissions.
///     pub struct Permission: u8 {
///         const NONE = 0;
///         const READ = 1 => "read access";
///         const WRITE = 2;
///         const DEFAULT = 1;
///     }
/// }
///
/// assert_eq!(fastenum::get_name(Permission::DEFAULT)?, "READ");
/// ```
///
/// Generates:
/// * The `Copy` newtype with a `pub const` per constant and a `bits()` accessor
/// * An [`Enumeration`](crate::Enumeration) impl whose metadata lives in a per-type `OnceLock`
#[macro_export]
macro_rules! constants {
	(
		#[flags]
		$(#[$outer:meta])*
		$vis:vis struct $name:ident : $repr:ty { $($body:tt)* }
	) => {
		$crate::constants!(@impl true, [$(#[$outer])*], $vis, $name, $repr, { $($body)* });
	};
	(
		$(#[$outer:meta])*
		$vis:vis struct $name:ident : $repr:ty { $($body:tt)* }
	) => {
		$crate::constants!(@impl false, [$(#[$outer])*], $vis, $name, $repr, { $($body)* });
	};
	(
		@impl $flags:literal, [$($outer:tt)*], $vis:vis, $name:ident, $repr:ty,
		{
			$(
				$(#[$inner:meta])*
				const $constant:ident = $value:expr $(=> $label:literal)?;
			)*
		}
	) => {
		$($outer)*
		#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
		$vis struct $name($repr);

		impl $name {
			$(
				$(#[$inner])*
				pub const $constant: Self = Self($value);
			)*

			/// Returns the underlying integer value.
			#[inline]
			pub const fn bits(self) -> $repr {
				self.0
			}
		}

		impl $crate::Enumeration for $name {
			type Repr = $repr;

			fn discover() -> $crate::Discovery<Self> {
				$crate::Discovery::new(::std::vec![
					$( $crate::Member::new(::core::stringify!($constant), Self::$constant) $(.with_label($label))? ),*
				])
				.flags($flags)
			}

			#[inline]
			fn to_repr(self) -> $repr {
				self.0
			}

			fn metadata() -> &'static $crate::Metadata<Self> {
				static CACHE: ::std::sync::OnceLock<$crate::Metadata<$name>> = ::std::sync::OnceLock::new();
				CACHE.get_or_init($crate::Metadata::build)
			}
		}
	};
}
