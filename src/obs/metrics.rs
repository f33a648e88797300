// self
use crate::obs::{CallOutcome, RelayCall};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(call: RelayCall, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"seguros_relay_call_total",
			"call" => call.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (call, outcome);
	}
}
