use std::{ffi::OsStr, path::PathBuf};

pub trait Expand {
	/// Replaces a leading `~` component with the user's home directory.
	/// Paths are returned untouched when no home directory can be found.
	fn expand_user(self) -> PathBuf
	where
		Self: Sized;
}

impl<T: Into<PathBuf>> Expand for T {
	fn expand_user(self) -> PathBuf {
		let path = self.into();
		let mut components = path.components();
		if let Some(component) = components.next() {
			if component.as_os_str() == OsStr::new("~") {
				if let Some(mut home) = dirs::home_dir() {
					home.extend(components);
					return home;
				}
			}
		}
		path
	}
}

#[cfg(test)]
mod tests {

	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn invalid_tilde() {
		let original = dirs::home_dir().unwrap().join("images~");
		assert_eq!(original.clone().expand_user(), original)
	}

	#[test]
	fn user_tilde() {
		let original = "~/images/shared";
		let expected = dirs::home_dir().unwrap().join("images").join("shared");
		assert_eq!(original.expand_user(), expected)
	}

	#[test]
	fn relative_untouched() {
		assert_eq!("resources/copy_images".expand_user(), PathBuf::from("resources/copy_images"))
	}
}
