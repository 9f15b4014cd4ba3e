use crate::db::{Insight, InsightSeries};
use crate::models::{Table, TableData};

/// Backing state for the View Data grid.
pub(crate) struct TableView {
    pub(crate) table: Table,
    pub(crate) data: TableData,
    pub(crate) selected: usize,
}

impl TableView {
    pub(crate) fn new(table: Table, data: TableData) -> Self {
        Self {
            table,
            data,
            selected: 0,
        }
    }

    /// Swap in freshly loaded rows, keeping the cursor in range.
    pub(crate) fn set_data(&mut self, data: TableData) {
        self.data = data;
        self.ensure_in_bounds();
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.data.is_empty() {
            return;
        }
        let len = self.data.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        if !self.data.is_empty() {
            self.selected = self.data.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.data.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.data.len() {
            self.selected = self.data.len() - 1;
        }
    }
}

/// The Add Data screen only tracks which table the user intends to fill.
pub(crate) struct AddDataScreen {
    pub(crate) table: Table,
}

impl AddDataScreen {
    pub(crate) fn supports_form(&self) -> bool {
        self.table == Table::Customers
    }
}

/// Backing state for the Insights chart.
pub(crate) struct InsightsScreen {
    pub(crate) series: InsightSeries,
}

impl InsightsScreen {
    pub(crate) fn insight(&self) -> Insight {
        self.series.insight
    }
}
