//! Excel export functionality

use crate::evaluation_service::Evaluation;
use masscheck_domain::model::result::case_label;
use masscheck_domain::CaseStatus;
use masscheck_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export an evaluation to an Excel file
pub fn export_to_excel(evaluation: &Evaluation, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, evaluation)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, evaluation)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, evaluation: &Evaluation) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Unity Check Report", &header_format)
        .map_err(excel_err)?;

    sheet.write_string(2, 0, "Evaluated At:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, evaluation.evaluated_at.to_rfc3339())
        .map_err(excel_err)?;

    sheet.write_string(3, 0, "Strategy:").map_err(excel_err)?;
    sheet
        .write_string(3, 1, evaluation.strategy.to_string())
        .map_err(excel_err)?;

    sheet.write_string(4, 0, "Cases:").map_err(excel_err)?;
    sheet
        .write_number(4, 1, evaluation.batch.len() as f64)
        .map_err(excel_err)?;

    sheet
        .write_string_with_format(6, 0, "Status Distribution", &header_format)
        .map_err(excel_err)?;

    let mut row = 7;
    for status in CaseStatus::ALL {
        sheet.write_string(row, 0, status.label()).map_err(excel_err)?;
        sheet
            .write_number(row, 1, evaluation.batch.count(status) as f64)
            .map_err(excel_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 22).map_err(excel_err)?;
    sheet.set_column_width(1, 28).map_err(excel_err)?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, evaluation: &Evaluation) -> Result<()> {
    sheet.set_name("Details").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let percent_format = Format::new().set_num_format("0");

    let headers = [
        "Case",
        "Volume (m³)",
        "Density (kg/m³)",
        "Mass (kg)",
        "Norm",
        "Max Mass (kg)",
        "Unity Check (%)",
        "Status",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, result) in evaluation.batch.results.iter().enumerate() {
        let row = (idx + 1) as u32;

        sheet.write_string(row, 0, case_label(idx)).map_err(excel_err)?;
        sheet
            .write_number(row, 1, result.case.volume)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 2, result.case.density)
            .map_err(excel_err)?;
        sheet.write_number(row, 3, result.mass).map_err(excel_err)?;
        sheet
            .write_string(row, 4, result.case.norm.code())
            .map_err(excel_err)?;
        sheet.write_number(row, 5, result.max_mass).map_err(excel_err)?;
        // Stored unrounded; the cell format rounds for display
        sheet
            .write_number_with_format(row, 6, result.unity_check, &percent_format)
            .map_err(excel_err)?;
        sheet
            .write_string(row, 7, result.status.label())
            .map_err(excel_err)?;
    }

    sheet.set_column_width(0, 10).map_err(excel_err)?;
    for col in 1..=6 {
        sheet.set_column_width(col, 16).map_err(excel_err)?;
    }

    Ok(())
}
