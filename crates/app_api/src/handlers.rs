use console_app::{InvoiceReport, PeriodParams, Result};
use console_core::{Period, scale_bytes};
use rollup::daily_deltas;

use crate::{
    AppContext, CapacityResponse, DailyRequest, DailySeriesResponse, EgressResponse,
    PeriodRequest, UsageSummaryResponse,
};

fn resolve_period(
    range: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Period> {
    console_app::resolve_period(&PeriodParams { range, from, to })
}

pub fn usage_summary(ctx: &AppContext) -> Result<UsageSummaryResponse> {
    let report = ctx.app_state.services.usage.report()?;
    Ok(UsageSummaryResponse {
        total: report.total,
        total_display: scale_bytes(report.total),
        daily: report.daily,
    })
}

pub fn usage_daily(ctx: &AppContext, req: DailyRequest) -> Result<DailySeriesResponse> {
    let period = resolve_period(req.range, req.from, req.to)?;
    let daily = ctx.app_state.services.usage.daily(
        &period,
        req.fill.unwrap_or(false),
        req.fill_zero.unwrap_or(false),
    )?;
    let deltas = daily_deltas(&daily);
    Ok(DailySeriesResponse {
        period_valid: period.is_valid(),
        daily,
        deltas,
    })
}

pub fn egress_daily(ctx: &AppContext, req: PeriodRequest) -> Result<EgressResponse> {
    let period = resolve_period(req.range, req.from, req.to)?;
    let report = ctx.app_state.services.egress.report(&period)?;
    Ok(EgressResponse {
        period_valid: period.is_valid(),
        total: report.total,
        total_display: scale_bytes(report.total),
        daily: report.daily,
    })
}

pub fn capacity(ctx: &AppContext) -> Result<CapacityResponse> {
    let report = ctx.app_state.services.plan.capacity()?;
    Ok(CapacityResponse {
        unlimited: report.reserved == 0,
        reserved: report.reserved,
        used: report.used,
        remaining: report.remaining,
        percent_used: report.percent_used,
    })
}

pub fn invoice(ctx: &AppContext, req: PeriodRequest) -> Result<InvoiceReport> {
    let period = resolve_period(req.range, req.from, req.to)?;
    ctx.app_state.services.billing.invoice(&period)
}
