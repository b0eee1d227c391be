use super::domain::Lead;

/// Error enumeration for CSV export failures.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer flush failed: {0}")]
    Io(std::io::Error),
    #[error("csv output was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

const CSV_HEADER: [&str; 11] = [
    "ID",
    "Nome",
    "Email",
    "Telefone",
    "Empresa",
    "Tipo de Negócio",
    "Status",
    "Criado em",
    "Atualizado em",
    "Resultado do Quiz",
    "Tags",
];

/// Serialize the whole lead collection as CSV. Fields containing commas
/// or quotes are quoted; dates render as `YYYY-MM-DD`; tags join into one
/// field. An empty collection exports as the empty string rather than a
/// lone header row — longstanding dashboard behavior that downstream
/// imports rely on.
pub fn export_leads_csv(leads: &[Lead]) -> Result<String, CsvExportError> {
    if leads.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for lead in leads {
        let created = lead.created_at.format("%Y-%m-%d").to_string();
        let updated = lead.updated_at.format("%Y-%m-%d").to_string();
        let tags = lead.tags.join(", ");
        let result = lead
            .quiz_result
            .map(|category| category.label())
            .unwrap_or_default();

        writer.write_record([
            lead.id.0.as_str(),
            lead.contact.name.as_str(),
            lead.contact.email.as_str(),
            lead.contact.phone.as_str(),
            lead.contact.company.as_deref().unwrap_or_default(),
            lead.contact.business_type.as_deref().unwrap_or_default(),
            lead.status.label(),
            created.as_str(),
            updated.as_str(),
            result,
            tags.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CsvExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
