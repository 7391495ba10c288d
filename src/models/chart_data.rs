use {
    crate::models::SimulationResult,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSign {
    /// Zero counts as profit
    NonNegative,
    Negative,
}

impl BarSign {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Self::NonNegative
        } else {
            Self::Negative
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ProfitLossBar {
    pub date: NaiveDate,
    /// Unrealised profit/loss at this month: value minus contributions so far
    pub profit_or_loss: f64,
    pub sign: BarSign,
}

/// The two charts shown per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ChartKind {
    #[strum(to_string = "Investment vs. Current Value Over Time")]
    InvestedVsValue,
    #[strum(to_string = "Monthly Profit/Loss")]
    MonthlyProfitLoss,
}

/// Toolkit-independent series for both charts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub invested: Vec<ChartPoint>,
    pub value: Vec<ChartPoint>,
    pub profit_loss: Vec<ProfitLossBar>,
}

impl ChartData {
    pub fn from_result(result: &SimulationResult) -> Self {
        let snapshots = &result.monthly_values;
        let mut data = Self {
            invested: Vec::with_capacity(snapshots.len()),
            value: Vec::with_capacity(snapshots.len()),
            profit_loss: Vec::with_capacity(snapshots.len()),
        };

        for s in snapshots {
            data.invested.push(ChartPoint {
                date: s.date,
                value: s.total_invested,
            });
            data.value.push(ChartPoint {
                date: s.date,
                value: s.current_value,
            });
            let delta = s.profit_or_loss();
            data.profit_loss.push(ProfitLossBar {
                date: s.date,
                profit_or_loss: delta,
                sign: BarSign::of(delta),
            });
        }
        data
    }

    pub fn is_empty(&self) -> bool {
        self.invested.is_empty()
    }

    /// Smallest and largest y value of a chart, for axis scaling.
    pub fn y_range(&self, kind: ChartKind) -> Option<(f64, f64)> {
        let values: Box<dyn Iterator<Item = f64> + '_> = match kind {
            ChartKind::InvestedVsValue => Box::new(
                self.invested
                    .iter()
                    .chain(self.value.iter())
                    .map(|p| p.value),
            ),
            ChartKind::MonthlyProfitLoss => {
                Box::new(self.profit_loss.iter().map(|b| b.profit_or_loss))
            }
        };
        values.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlySnapshot;

    fn snapshot(month: u32, invested: f64, value: f64) -> MonthlySnapshot {
        MonthlySnapshot {
            date: NaiveDate::from_ymd_opt(2020, month, 1).unwrap(),
            price: 1.0,
            total_invested: invested,
            total_units: value,
            current_value: value,
        }
    }

    #[test]
    fn bars_are_signed_by_unrealised_profit() {
        let mut result = SimulationResult::empty(10.0);
        result.monthly_values = vec![
            snapshot(1, 10.0, 10.0),
            snapshot(2, 20.0, 22.0),
            snapshot(3, 30.0, 26.5),
        ];

        let charts = ChartData::from_result(&result);
        let signs: Vec<_> = charts.profit_loss.iter().map(|b| b.sign).collect();
        assert_eq!(
            signs,
            vec![BarSign::NonNegative, BarSign::NonNegative, BarSign::Negative]
        );
        assert!((charts.profit_loss[2].profit_or_loss + 3.5).abs() < 1e-12);
        assert_eq!(charts.invested.len(), 3);
        assert_eq!(charts.value[1].value, 22.0);
        assert_eq!(
            charts.y_range(ChartKind::InvestedVsValue),
            Some((10.0, 30.0))
        );
    }

    #[test]
    fn empty_result_produces_empty_charts() {
        let charts = ChartData::from_result(&SimulationResult::empty(0.0));
        assert!(charts.is_empty());
        assert_eq!(charts.y_range(ChartKind::MonthlyProfitLoss), None);
    }
}
