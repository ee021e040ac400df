mod aggregate;
mod filer;
mod filing;
mod vehicle;
mod weight_category;

pub use aggregate::{CategoryAggregate, GrandTotals, RepresentativeRate};
pub use filer::{
    AccountType, Designee, ElectronicWithdrawal, FilerRecord, PaidPreparer, PaymentMethod,
    ReturnFlags,
};
pub use filing::Filing;
pub use vehicle::{FirstUseMonth, Vehicle};
pub use weight_category::{ParseWeightCategoryError, WeightCategory};
