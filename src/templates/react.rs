//! React/TypeScript bodies. `{{NAME}}` is replaced with the PascalCase feature name.

pub const COMPONENT: &str = r#"import React from 'react';

const {{NAME}}Component = () => {
  return <div>{{NAME}} Component</div>;
};

export default {{NAME}}Component;"#;

pub const QUERY: &str = r#"// {{NAME}} query logic goes here"#;

pub const HOOK: &str = r#"import { useState } from 'react';

const use{{NAME}} = () => {
  const [data, setData] = useState<null | any>(null);

  return [data, setData];
};

export default use{{NAME}};"#;

pub const TYPES: &str = r#"export type {{NAME}} = {
  id: string;
  name: string;
};"#;

pub const PAGE: &str = r#"import React from 'react';
import {{NAME}}Component from '../components/{{NAME}}Component';

const {{NAME}}Page = () => {
  return <{{NAME}}Component />;
};

export default {{NAME}}Page;"#;
