//! Type-specific sanitizers
//!
//! One transformation per [`InputType`](crate::InputType). Each returns a
//! canonical, length-bounded value and never panics; failure is signalled with an
//! empty string (email, url) or `None` (number).
//!
//! Every sanitizer is idempotent: applying it to its own output changes nothing.
//! Those with a length cap read at most four times that many characters of the
//! raw value, so the cost of a field follows its cap.

pub mod contact;
pub mod html;
pub mod numeric;
pub mod string;
pub mod url;

pub use contact::*;
pub use html::{sanitize_content, strip_event_handlers, strip_html_tags, strip_script_blocks};
pub use numeric::*;
pub use string::*;
pub use self::url::*;
