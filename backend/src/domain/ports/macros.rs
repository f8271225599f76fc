//! Declarative helpers for adapter-facing error enums.
//!
//! [`define_port_error`] declares an arbitrary error enum whose variants get
//! snake_case constructors accepting `impl Into<_>`. [`repository_error`]
//! covers the common two-variant repository shape and also provides the
//! conversion into the domain [`Error`](crate::domain::Error): connection
//! failures become `service_unavailable`, query failures become `internal`.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*
        }
    };
}

/// `repository_error!(BrandRepositoryError, "brand repository");`
macro_rules! repository_error {
    ($name:ident, $label:literal) => {
        #[doc = concat!("Errors raised by ", $label, " adapters.")]
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// Repository connection could not be established.
            #[error("{} connection failed: {message}", $label)]
            Connection { message: String },
            /// Query or mutation failed during execution.
            #[error("{} query failed: {message}", $label)]
            Query { message: String },
        }

        impl $name {
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(err: $name) -> Self {
                match err {
                    $name::Connection { message } => {
                        Self::service_unavailable(format!("{} unavailable: {message}", $label))
                    }
                    $name::Query { message } => {
                        Self::internal(format!("{} error: {message}", $label))
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
pub(crate) use repository_error;

#[cfg(test)]
mod tests {
    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum UploadRejection {
            Rejected { folder: String } => "folder rejected: {folder}",
            TooLarge { name: String, bytes: u64 } => "{name} is {bytes} bytes",
        }
    }

    repository_error!(PhotoRepositoryError, "photo repository");

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = UploadRejection::rejected("../media");
        assert_eq!(err.to_string(), "folder rejected: ../media");
    }

    #[test]
    fn constructors_support_mixed_field_types() {
        let err = UploadRejection::too_large("portrait.jpg", 42_u64);
        assert_eq!(err.to_string(), "portrait.jpg is 42 bytes");
    }

    #[test]
    fn repository_errors_carry_their_label() {
        let err = PhotoRepositoryError::query("syntax");
        assert_eq!(err.to_string(), "photo repository query failed: syntax");

        let mapped = Error::from(PhotoRepositoryError::connection("refused"));
        assert_eq!(mapped.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(mapped.message(), "photo repository unavailable: refused");
    }
}
