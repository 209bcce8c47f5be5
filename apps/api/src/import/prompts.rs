// Prompt for turning pasted or extracted resume text into a document.

pub const IMPORT_SCHEMA: &str = r#"{
  "personalInfo": {"firstName": "", "lastName": "", "email": "", "phone": "",
                   "address": "", "jobTitle": "", "summary": "",
                   "linkedin": "", "github": "", "website": ""},
  "experience": [{"id": "", "company": "", "position": "", "location": "",
                  "startDate": "YYYY-MM", "endDate": "YYYY-MM", "current": false,
                  "description": ""}],
  "education": [{"id": "", "school": "", "degree": "", "location": "",
                 "startDate": "YYYY-MM", "endDate": "YYYY-MM", "current": false}],
  "skills": [{"id": "", "name": "", "level": "Beginner|Intermediate|Advanced|Expert"}],
  "languages": [{"id": "", "name": "", "level": "Native|Fluent|Conversational|Basic"}],
  "certificates": [{"id": "", "name": "", "issuer": "", "date": "", "url": ""}],
  "publications": [{"id": "", "title": "", "publisher": "", "date": "",
                    "authors": "", "url": "", "description": ""}]
}"#;

pub fn import_prompt(text: &str) -> String {
    format!(
        "Extract the resume below into JSON with exactly this shape:\n{IMPORT_SCHEMA}\n\n\
         Leave a field empty when the resume does not state it. Omit \"level\" \
         when it is not stated. Put each role's bullet points in \"description\", \
         one per line.\n\n\
         Resume text:\n{text}"
    )
}
