use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{cycle_in, NewCustomer};

/// Date format accepted by the signup date field.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields of the customer form, in tab order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum CustomerField {
    #[default]
    Name,
    Email,
    Phone,
    Location,
    SignupDate,
    IsPremium,
    PreferredCuisine,
}

impl CustomerField {
    pub(crate) const ALL: [CustomerField; 7] = [
        CustomerField::Name,
        CustomerField::Email,
        CustomerField::Phone,
        CustomerField::Location,
        CustomerField::SignupDate,
        CustomerField::IsPremium,
        CustomerField::PreferredCuisine,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Email => "Email",
            CustomerField::Phone => "Phone",
            CustomerField::Location => "Location",
            CustomerField::SignupDate => "Signup Date",
            CustomerField::IsPremium => "Is Premium?",
            CustomerField::PreferredCuisine => "Preferred Cuisine",
        }
    }

    /// Row index of the field inside the form popup.
    pub(crate) fn row(self) -> u16 {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as u16
    }
}

/// Internal representation of the "Add Customer" form fields.
#[derive(Clone, Debug)]
pub(crate) struct CustomerForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) location: String,
    pub(crate) signup_date: String,
    pub(crate) is_premium: bool,
    pub(crate) preferred_cuisine: String,
    pub(crate) active: CustomerField,
    pub(crate) error: Option<String>,
}

impl CustomerForm {
    /// Empty form with the signup date preset to `today`.
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            signup_date: today.format(DATE_FORMAT).to_string(),
            is_premium: false,
            preferred_cuisine: String::new(),
            active: CustomerField::Name,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = cycle_in(&CustomerField::ALL, self.active, 1);
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = cycle_in(&CustomerField::ALL, self.active, -1);
    }

    pub(crate) fn toggle_premium(&mut self) {
        self.is_premium = !self.is_premium;
    }

    /// Append a character to the active field. On the checkbox a space
    /// toggles the value; everything else is rejected.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let active = self.active;
        if let Some(value) = self.text_mut(active) {
            value.push(ch);
            return true;
        }
        if ch == ' ' {
            self.toggle_premium();
            return true;
        }
        false
    }

    pub(crate) fn backspace(&mut self) {
        let active = self.active;
        if let Some(value) = self.text_mut(active) {
            value.pop();
        }
    }

    fn text(&self, field: CustomerField) -> Option<&String> {
        match field {
            CustomerField::Name => Some(&self.name),
            CustomerField::Email => Some(&self.email),
            CustomerField::Phone => Some(&self.phone),
            CustomerField::Location => Some(&self.location),
            CustomerField::SignupDate => Some(&self.signup_date),
            CustomerField::PreferredCuisine => Some(&self.preferred_cuisine),
            CustomerField::IsPremium => None,
        }
    }

    fn text_mut(&mut self, field: CustomerField) -> Option<&mut String> {
        match field {
            CustomerField::Name => Some(&mut self.name),
            CustomerField::Email => Some(&mut self.email),
            CustomerField::Phone => Some(&mut self.phone),
            CustomerField::Location => Some(&mut self.location),
            CustomerField::SignupDate => Some(&mut self.signup_date),
            CustomerField::PreferredCuisine => Some(&mut self.preferred_cuisine),
            CustomerField::IsPremium => None,
        }
    }

    /// Validate the inputs and build the row to insert. Manually added
    /// customers start with no orders and no rating.
    pub(crate) fn parse_inputs(&self) -> Result<NewCustomer> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Customer name is required."));
        }
        let signup_date = NaiveDate::parse_from_str(self.signup_date.trim(), DATE_FORMAT)
            .map_err(|_| anyhow!("Signup date must look like YYYY-MM-DD."))?;

        Ok(NewCustomer::registered(
            name.to_string(),
            self.email.trim().to_string(),
            self.phone.trim().to_string(),
            self.location.trim().to_string(),
            signup_date,
            self.is_premium,
            self.preferred_cuisine.trim().to_string(),
        ))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: CustomerField) -> Line<'static> {
        let is_active = self.active == field;
        let display = match self.text(field) {
            Some(value) if value.is_empty() => {
                if field == CustomerField::Name {
                    "<required>".to_string()
                } else {
                    "<optional>".to_string()
                }
            }
            Some(value) => value.clone(),
            None => {
                if self.is_premium {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        };
        let is_placeholder = self.text(field).map(String::is_empty).unwrap_or(false);

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if is_placeholder {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of a text field; zero for the checkbox.
    pub(crate) fn value_len(&self, field: CustomerField) -> usize {
        self.text(field).map(|v| v.chars().count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn type_text(form: &mut CustomerForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn new_form_prefills_signup_date() {
        let form = CustomerForm::new(today());
        assert_eq!(form.signup_date, "2026-10-16");
        assert_eq!(form.active, CustomerField::Name);
    }

    #[test]
    fn name_is_required() {
        let form = CustomerForm::new(today());
        let err = form.parse_inputs().unwrap_err();
        assert_eq!(err.to_string(), "Customer name is required.");
    }

    #[test]
    fn invalid_date_is_rejected() {
        let mut form = CustomerForm::new(today());
        type_text(&mut form, "Ravi");
        form.signup_date = "16/10/2026".into();
        let err = form.parse_inputs().unwrap_err();
        assert_eq!(err.to_string(), "Signup date must look like YYYY-MM-DD.");
    }

    #[test]
    fn space_toggles_checkbox_and_tab_order_wraps() {
        let mut form = CustomerForm::new(today());
        for _ in 0..5 {
            form.next_field();
        }
        assert_eq!(form.active, CustomerField::IsPremium);
        assert!(form.push_char(' '));
        assert!(form.is_premium);
        assert!(!form.push_char('x'));

        form.next_field();
        form.next_field();
        assert_eq!(form.active, CustomerField::Name);
        form.previous_field();
        assert_eq!(form.active, CustomerField::PreferredCuisine);
    }

    #[test]
    fn parsed_customer_has_zero_history() {
        let mut form = CustomerForm::new(today());
        type_text(&mut form, " Ravi Nair ");
        form.next_field();
        type_text(&mut form, "ravi@example.com");
        form.is_premium = true;

        let customer = form.parse_inputs().expect("valid form");
        assert_eq!(customer.name, "Ravi Nair");
        assert_eq!(customer.email, "ravi@example.com");
        assert_eq!(customer.signup_date, today());
        assert!(customer.is_premium);
        assert_eq!(customer.total_orders, 0);
        assert_eq!(customer.average_rating, 0.0);
    }

    #[test]
    fn backspace_ignores_checkbox() {
        let mut form = CustomerForm::new(today());
        type_text(&mut form, "ab");
        form.backspace();
        assert_eq!(form.name, "a");
        form.active = CustomerField::IsPremium;
        form.backspace();
        assert_eq!(form.value_len(CustomerField::IsPremium), 0);
    }
}
