//! Payslip PDF layout.
//!
//! Assembles the payslip content blocks in order (header, earnings,
//! deductions, totals) on letter-size pages and returns the PDF bytes.
//! Pagination is a cursor: when a line would run past the bottom margin,
//! a new page is started.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Company, Employee, PayItem, PayrollRecord};

use super::format::{format_clp, round_clp};

fn pdf_error(err: printpdf::Error) -> PayrollError {
    PayrollError::DocumentBuild {
        message: err.to_string(),
    }
}

/// A text cursor over letter-size pages.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: Mm,
}

impl PageWriter {
    fn new(title: &str) -> PayrollResult<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(215.9), Mm(279.4), "Contenido");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: Mm(254.0),
        })
    }

    /// Moves the cursor down; starts a new page at the bottom margin.
    fn advance(&mut self, gap: Mm) {
        if self.y.0 - gap.0 < 25.0 {
            let (page, layer) = self.doc.add_page(Mm(215.9), Mm(279.4), "Contenido");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(254.0);
        } else {
            self.y = Mm(self.y.0 - gap.0);
        }
    }

    fn text(&self, text: &str, x: Mm, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, 10.0, x, self.y, font);
    }

    fn heading(&self, text: &str, x: Mm) {
        self.layer.use_text(text, 13.0, x, self.y, &self.bold);
    }

    fn finish(self) -> PayrollResult<Vec<u8>> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

/// Writes one itemized section and returns the sum of its rounded
/// amounts, so the section reconciles with the totals block.
fn write_items(page: &mut PageWriter, title: &str, items: &[PayItem]) -> Decimal {
    page.text(title, Mm(20.0), true);
    page.advance(Mm(6.0));

    let mut total = Decimal::ZERO;
    for item in items {
        let amount = round_clp(item.amount);
        total += amount;
        page.text(&item.label, Mm(25.0), false);
        page.text(&format_clp(amount), Mm(150.0), false);
        page.advance(Mm(5.0));
    }
    total
}

fn write_total(page: &mut PageWriter, label: &str, amount: Decimal) {
    page.text(label, Mm(25.0), true);
    page.text(&format_clp(amount), Mm(150.0), true);
    page.advance(Mm(6.0));
}

/// Builds the payslip PDF for one payroll record.
///
/// All three records are validated first, and the payroll must reference
/// the given employee and company. Returns the PDF bytes; persistence is
/// the caller's responsibility.
pub fn build_payslip(
    company: &Company,
    employee: &Employee,
    payroll: &PayrollRecord,
) -> PayrollResult<Vec<u8>> {
    company.validate()?;
    employee.validate()?;
    payroll.validate()?;

    if payroll.employee_id != employee.id {
        return Err(PayrollError::DocumentBuild {
            message: format!(
                "payroll belongs to employee '{}', not '{}'",
                payroll.employee_id, employee.id
            ),
        });
    }
    if payroll.company_id != company.id {
        return Err(PayrollError::DocumentBuild {
            message: format!(
                "payroll belongs to company '{}', not '{}'",
                payroll.company_id, company.id
            ),
        });
    }
    if employee.company_id != company.id {
        return Err(PayrollError::DocumentBuild {
            message: format!(
                "employee '{}' does not work for company '{}'",
                employee.id, company.id
            ),
        });
    }

    let title = format!("Liquidación de sueldo {}", payroll.period);
    let mut page = PageWriter::new(&title)?;

    page.heading("LIQUIDACIÓN DE SUELDO", Mm(20.0));
    page.advance(Mm(8.0));
    page.text(
        &format!("{}  RUT {}", company.razon_social, company.rut),
        Mm(20.0),
        true,
    );
    page.advance(Mm(5.0));
    page.text(
        &format!("{}, {}", company.direccion, company.ciudad),
        Mm(20.0),
        false,
    );
    page.advance(Mm(5.0));
    page.text(
        &format!("Período: {}", payroll.period.display_es()),
        Mm(20.0),
        false,
    );
    page.advance(Mm(9.0));

    page.text(&format!("Trabajador: {}", employee.nombre), Mm(20.0), false);
    page.advance(Mm(5.0));
    page.text(
        &format!("RUT: {}    Cargo: {}", employee.rut, employee.cargo),
        Mm(20.0),
        false,
    );
    page.advance(Mm(5.0));
    page.text(
        &format!(
            "Fecha de ingreso: {}",
            employee.fecha_ingreso.format("%d-%m-%Y")
        ),
        Mm(20.0),
        false,
    );
    page.advance(Mm(9.0));

    let total_earnings = write_items(&mut page, "HABERES", &payroll.earnings);
    page.advance(Mm(2.0));
    let total_deductions = write_items(&mut page, "DESCUENTOS", &payroll.deductions);
    page.advance(Mm(4.0));

    write_total(&mut page, "TOTAL HABERES", total_earnings);
    write_total(&mut page, "TOTAL DESCUENTOS", total_deductions);
    write_total(&mut page, "LÍQUIDO A PAGAR", total_earnings - total_deductions);

    page.finish()
}
