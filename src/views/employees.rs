//! Employee list table

use crate::models::{Department, Employee, EmployeeStatus};
use crate::views::date_value;
use hrms_tables::{Field, FieldValue, FilterGroup, TableDefinition};

/// Employee table: search over name, email and position; filters on
/// department and status
///
/// The department filter compares department names, which is what employee
/// records carry.
pub fn employee_table(departments: &[Department]) -> TableDefinition<Employee> {
	let department_group = departments
		.iter()
		.fold(FilterGroup::new("department", "Department"), |group, d| {
			group.option(d.name.as_str(), d.name.as_str())
		});
	let status_group = EmployeeStatus::ALL
		.iter()
		.fold(FilterGroup::new("status", "Status"), |group, s| {
			group.option(s.as_str(), s.label())
		});

	TableDefinition::new()
		.field(Field::new("id", "ID", |e: &Employee| e.id.into()))
		.field(Field::new("name", "Name", |e: &Employee| e.full_name().into()).searchable(true))
		.field(
			Field::new("email", "Email", |e: &Employee| e.email.as_str().into()).searchable(true),
		)
		.field(
			Field::new("position", "Position", |e: &Employee| e.position.as_str().into())
				.searchable(true),
		)
		.field(Field::new("department", "Department", |e: &Employee| {
			e.department.as_str().into()
		}))
		.field(Field::new("status", "Status", |e: &Employee| e.status.as_str().into()))
		.field(Field::new("hire_date", "Hire Date", |e: &Employee| date_value(e.hire_date)))
		.field(Field::new("salary", "Salary", |e: &Employee| FieldValue::from(e.salary)))
		.filter_group(department_group)
		.filter_group(status_group)
}
