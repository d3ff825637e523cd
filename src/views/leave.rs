//! Leave request table

use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use crate::views::date_value;
use hrms_tables::{
	Field, FieldValue, FilterGroup, Filters, SortDirection, SortSpec, TableConfig, TableDefinition,
	TableState,
};

/// Leave table: search over employee name and reason; filters on status
/// and leave type
pub fn leave_table() -> TableDefinition<LeaveRequest> {
	let status_group = LeaveStatus::ALL
		.iter()
		.fold(FilterGroup::new("status", "Status"), |group, s| {
			group.option(s.as_str(), s.label())
		});
	let type_group = LeaveType::ALL
		.iter()
		.fold(FilterGroup::new("leave_type", "Leave Type"), |group, t| {
			group.option(t.as_str(), t.label())
		});

	TableDefinition::new()
		.field(
			Field::new("employee", "Employee", |l: &LeaveRequest| {
				l.employee_name.as_str().into()
			})
			.searchable(true),
		)
		.field(Field::new("leave_type", "Type", |l: &LeaveRequest| {
			l.leave_type.as_str().into()
		}))
		.field(Field::new("status", "Status", |l: &LeaveRequest| l.status.as_str().into()))
		.field(Field::new("start_date", "From", |l: &LeaveRequest| date_value(l.start_date)))
		.field(Field::new("end_date", "To", |l: &LeaveRequest| date_value(l.end_date)))
		.field(Field::new("days", "Days", |l: &LeaveRequest| FieldValue::Int(l.days())))
		.field(
			Field::new("reason", "Reason", |l: &LeaveRequest| l.reason.as_deref().into())
				.sortable(false)
				.searchable(true),
		)
		.filter_group(status_group)
		.filter_group(type_group)
}

/// Initial state of the leave screen: newest requests first
///
/// `reset` returns here, including the `pending_only` filter.
pub fn leave_state(config: &TableConfig, pending_only: bool) -> TableState {
	let filters = if pending_only {
		Filters::new().with("status", LeaveStatus::Pending.as_str())
	} else {
		Filters::new()
	};
	TableState::with_defaults(
		config.page_size,
		filters,
		Some(SortSpec::new("start_date", SortDirection::Desc)),
	)
}
