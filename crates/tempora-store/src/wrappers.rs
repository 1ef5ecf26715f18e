use tempora_domain::{LocalDate, LocalDateTime, LocalTime, UnixTimestamp, Weekday};

/// Convert a domain value into its SQLite column wrapper
///
/// # Example
///
/// ```
/// use tempora_domain::LocalDate;
/// use tempora_store::ToSqlColumn;
///
/// let date = LocalDate::must_new(2018, 1, 2);
/// let column = date.to_sql_column();
/// assert_eq!(format!("{column:?}"), "SqlDate(LocalDate(2018-01-02))");
/// ```
pub trait ToSqlColumn {
    /// The wrapper type to convert to
    type Target;

    /// Wrap the value for use as a query parameter
    fn to_sql_column(self) -> Self::Target;
}

/// An absent value becomes SQL `NULL`
impl<T: ToSqlColumn> ToSqlColumn for Option<T> {
    type Target = Option<T::Target>;

    fn to_sql_column(self) -> Self::Target {
        self.map(ToSqlColumn::to_sql_column)
    }
}

macro_rules! column_wrapper {
    ($(#[$doc:meta])* $name:ident($inner:ty)) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $name($inner);

        impl $name {
            /// The wrapped domain value
            pub fn to_domain(self) -> $inner {
                self.0
            }
        }

        impl ToSqlColumn for $inner {
            type Target = $name;

            fn to_sql_column(self) -> $name {
                $name(self)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> $name {
                $name(value)
            }
        }

        impl From<$name> for $inner {
            fn from(column: $name) -> $inner {
                column.0
            }
        }
    };
}

column_wrapper!(
    /// A date stored as `YYYY-MM-DD` text
    SqlDate(LocalDate)
);

column_wrapper!(
    /// A time of day stored as `HH:MM` text
    SqlTime(LocalTime)
);

column_wrapper!(
    /// A date-time stored as `YYYY-MM-DD HH:MM:SS[.f]` text
    SqlDateTime(LocalDateTime)
);

column_wrapper!(
    /// A weekday stored as its uppercase English name
    SqlWeekday(Weekday)
);

column_wrapper!(
    /// Seconds since the epoch stored as an integer
    SqlUnixTimestamp(UnixTimestamp)
);
