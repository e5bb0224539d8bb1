//! Snippet generators for the supported languages.

use snippets_application::{InputSnippetProvider, SnippetGenerator};
use snippets_domain::{InferenceSnippet, ModelDescriptor, SnippetLanguage, SnippetOptions};

use super::registry::{render_body, supports_snippet};

/// Generate the Node.js snippet against the hosted inference API.
///
/// The model id and access token are inserted verbatim.
#[must_use]
pub fn generate_node_snippet(
    model: &ModelDescriptor,
    access_token: &str,
    inputs: &dyn InputSnippetProvider,
) -> String {
    generate_snippet(model, access_token, inputs, &SnippetOptions::default()).code
}

/// Whether [`generate_node_snippet`] renders a request body for the model.
#[must_use]
pub fn has_node_snippet(model: &ModelDescriptor) -> bool {
    supports_snippet(model)
}

/// Generate a snippet for the model in the language selected by `options`.
#[must_use]
pub fn generate_snippet(
    model: &ModelDescriptor,
    access_token: &str,
    inputs: &dyn InputSnippetProvider,
    options: &SnippetOptions,
) -> InferenceSnippet {
    CodeGenerator::new(options).generate(model, access_token, inputs)
}

/// Code generator that produces inference snippets from model descriptors.
pub struct CodeGenerator<'a> {
    options: &'a SnippetOptions,
}

impl<'a> CodeGenerator<'a> {
    /// Create a new code generator with the given options.
    #[must_use]
    pub const fn new(options: &'a SnippetOptions) -> Self {
        Self { options }
    }

    /// Generate the snippet for the given model.
    #[must_use]
    pub fn generate(
        &self,
        model: &ModelDescriptor,
        access_token: &str,
        inputs: &dyn InputSnippetProvider,
    ) -> InferenceSnippet {
        tracing::trace!(
            model_id = %model.id,
            language = self.options.language.as_str(),
            "generating inference snippet"
        );

        let body = render_body(model, inputs);
        let url = self.options.model_url(&model.id);

        let code = match self.options.language {
            SnippetLanguage::JavaScript => Self::generate_javascript(&url, access_token, &body),
            SnippetLanguage::Python => Self::generate_python(&url, access_token, &body),
            SnippetLanguage::Curl => Self::generate_curl(&url, access_token, &body),
        };

        InferenceSnippet::new(code, self.options.language, model.id.clone())
    }

    fn generate_javascript(url: &str, access_token: &str, body: &str) -> String {
        let mut code = String::new();

        code.push_str("import fetch from \"node-fetch\";\n\n");

        code.push_str("async function query(data) {\n");
        code.push_str("\tconst response = await fetch(\n");
        code.push_str(&format!("\t\t\"{url}\",\n"));
        code.push_str("\t\t{\n");
        code.push_str(&format!(
            "\t\t\theaders: {{ Authorization: `Bearer {access_token}` }},\n"
        ));
        code.push_str("\t\t\tmethod: \"POST\",\n");
        code.push_str("\t\t\tbody: JSON.stringify(data),\n");
        code.push_str("\t\t}\n");
        code.push_str("\t);\n");
        code.push_str("\tconst result = await response.json();\n");
        code.push_str("\treturn result;\n");
        code.push_str("}\n\n");

        code.push_str(&format!("query({body}).then((response) => {{\n"));
        code.push_str("\tconsole.log(JSON.stringify(response));\n");
        code.push_str("});");

        code
    }

    fn generate_python(url: &str, access_token: &str, body: &str) -> String {
        let mut code = String::new();

        code.push_str("import requests\n\n");

        code.push_str(&format!("API_URL = \"{url}\"\n"));
        code.push_str(&format!(
            "headers = {{\"Authorization\": f\"Bearer {access_token}\"}}\n\n"
        ));

        code.push_str("def query(payload):\n");
        code.push_str("\tresponse = requests.post(API_URL, headers=headers, json=payload)\n");
        code.push_str("\treturn response.json()\n\n");

        code.push_str(&format!("output = query({body})"));

        code
    }

    fn generate_curl(url: &str, access_token: &str, body: &str) -> String {
        let mut parts = vec![format!("curl {url}"), "\t-X POST".to_string()];

        // Body goes inside single quotes
        if !body.is_empty() {
            let escaped = body.replace('\'', "'\\''");
            parts.push(format!("\t-d '{escaped}'"));
        }

        parts.push(format!("\t-H \"Authorization: Bearer {access_token}\""));

        parts.join(" \\\n")
    }
}

/// [`SnippetGenerator`] adapter for one language and input provider.
#[derive(Debug, Clone)]
pub struct InferenceSnippetGenerator<P> {
    options: SnippetOptions,
    inputs: P,
}

impl<P: InputSnippetProvider> InferenceSnippetGenerator<P> {
    /// Creates a generator from options and an input provider.
    #[must_use]
    pub const fn new(options: SnippetOptions, inputs: P) -> Self {
        Self { options, inputs }
    }

    /// Creates a generator for a language with default options.
    #[must_use]
    pub fn for_language(language: SnippetLanguage, inputs: P) -> Self {
        Self::new(SnippetOptions::for_language(language), inputs)
    }

    /// Options this generator renders with.
    #[must_use]
    pub const fn options(&self) -> &SnippetOptions {
        &self.options
    }
}

impl<P: InputSnippetProvider> SnippetGenerator for InferenceSnippetGenerator<P> {
    fn language(&self) -> SnippetLanguage {
        self.options.language
    }

    fn supports(&self, model: &ModelDescriptor) -> bool {
        supports_snippet(model)
    }

    fn generate(&self, model: &ModelDescriptor, access_token: &str) -> InferenceSnippet {
        generate_snippet(model, access_token, &self.inputs, &self.options)
    }
}

/// One boxed generator per [`SnippetLanguage`], sharing `inputs`.
#[must_use]
pub fn generators_for_all_languages<P>(inputs: &P) -> Vec<Box<dyn SnippetGenerator>>
where
    P: InputSnippetProvider + Clone + 'static,
{
    SnippetLanguage::all()
        .iter()
        .map(|language| {
            Box::new(InferenceSnippetGenerator::for_language(*language, inputs.clone()))
                as Box<dyn SnippetGenerator>
        })
        .collect()
}
