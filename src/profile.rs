use chrono::NaiveDate;

use crate::range::{DateRange, RoleEnd};

/// One work-experience entry. `key` is the locale key prefix under which the
/// role's title, company, period and description live.
pub struct Role {
    pub key: &'static str,
    pub dates: DateRange,
}

pub struct Profile {
    pub name: &'static str,
    /// Start of tracked experience; the headline figure is measured from
    /// this date, not from the earliest role.
    pub experience_anchor: NaiveDate,
    pub roles: Vec<Role>,
}

impl Profile {
    pub fn data() -> Self {
        let anchor = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        Self {
            name: "Artem Kovalenko",
            experience_anchor: anchor,
            roles: vec![
                Role {
                    key: "experience.role2",
                    dates: DateRange::new(
                        NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
                        RoleEnd::Present,
                    ),
                },
                Role {
                    key: "experience.role1",
                    dates: DateRange::new(anchor, RoleEnd::On(NaiveDate::from_ymd_opt(2023, 10, 31).unwrap())),
                },
            ],
        }
    }
}
